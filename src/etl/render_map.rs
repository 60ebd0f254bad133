use std::{fs::{self, File}, io::BufWriter, path::{Path, PathBuf}};

use raqote::{DrawOptions, DrawTarget, LineCap, LineJoin, PathBuilder, Point, SolidSource, Source, StrokeStyle};
use serde::Deserialize;

use crate::{
    data::{
        locations::{self, LocationRecord},
        world,
    },
    errors::Result,
    etl::colormap,
    RenderConfig,
};

use super::Etl;

mod fk {
    pub use font_kit::family_name::FamilyName;
    pub use font_kit::font::Font;
    pub use font_kit::properties::Properties;
    pub use font_kit::source::SystemSource;
    pub use pathfinder_geometry::vector::vec2f;
}

pub const ETL_NAME: &str = "render_map";
pub const OUTPUT_FILE_NAME: &str = "saved_map.png";

// Canvas regions: title band on top, colorbar gutter on the right.
const MARGIN_TOP: f64 = 90.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 190.0;
const MARKER_RADIUS: f32 = 8.0;

use serialize_color::deserialize;

#[derive(Deserialize)]
pub struct Theme<'a> {
    #[serde(deserialize_with = "deserialize")]
    pub land_color: Source<'a>,

    #[serde(deserialize_with = "deserialize")]
    pub coastline_color: Source<'a>,

    #[serde(deserialize_with = "deserialize")]
    pub lake_color: Source<'a>,

    #[serde(deserialize_with = "deserialize")]
    pub country_color: Source<'a>,

    #[serde(deserialize_with = "deserialize")]
    pub text_color: Source<'a>,

    #[serde(deserialize_with = "deserialize")]
    pub marker_outline_color: Source<'a>,
}

mod serialize_color {
    use raqote::{SolidSource, Source};
    use serde::{de, Deserializer};
    use serde::de::Visitor;

    struct ColorVisitor;

    impl<'de> Visitor<'de> for ColorVisitor {
        type Value = SolidSource;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(formatter, "a color string of the form 'rgb(r, g, b)'")
        }

        fn visit_str<E>(self, string: &str) -> Result<Self::Value, E> where E: de::Error {
            let body = string
                .strip_prefix("rgb(")
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(string), &self))?;
            let mut channels = body.split(',');
            let r = parse_channel(&self, string, channels.next())?;
            let g = parse_channel(&self, string, channels.next())?;
            let b = parse_channel(&self, string, channels.next())?;
            if channels.next().is_some() {
                return Err(de::Error::invalid_value(de::Unexpected::Str(string), &self));
            }
            Ok(SolidSource::from_unpremultiplied_argb(0xff, r, g, b))
        }
    }

    fn parse_channel<E>(
        visitor: &ColorVisitor,
        string: &str,
        channel: Option<&str>,
    ) -> Result<u8, E> where E: de::Error {
        channel
            .and_then(|c| c.trim().parse::<u8>().ok())
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(string), visitor))
    }

    pub fn deserialize<'de, 'a, D>(
        deserializer: D,
    ) -> Result<Source<'a>, D::Error>
        where D: Deserializer<'de>, 'a: 'de {
        Ok(Source::Solid(deserializer.deserialize_str(ColorVisitor)?))
    }
}

/// Natural Earth pseudo-cylindrical projection (polynomial approximation).
/// Input in degrees, output in projection units with the equator along +x.
fn natural_earth_raw(lon: f64, lat: f64) -> (f64, f64) {
    let l = lon.to_radians();
    let p = lat.to_radians();
    let p2 = p * p;
    let p4 = p2 * p2;
    let x = l * (0.8707 - 0.131979 * p2 + p4 * (-0.013791 + p4 * (0.003971 * p2 - 0.001529 * p4)));
    let y = p * (1.007226 + p2 * (0.015085 + p4 * (-0.044475 + 0.028874 * p2 - 0.005916 * p4)));
    (x, y)
}

/// Projection fitted to a pixel rectangle, y growing downward.
struct Projection {
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl Projection {
    fn fit(left: f64, top: f64, width: f64, height: f64) -> Projection {
        let (x_max, _) = natural_earth_raw(180.0, 0.0);
        let (_, y_max) = natural_earth_raw(0.0, 90.0);
        let scale = (width / (2.0 * x_max)).min(height / (2.0 * y_max));
        Projection {
            scale,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
        }
    }

    fn project(&self, lon: f64, lat: f64) -> (f32, f32) {
        let (x, y) = natural_earth_raw(lon, lat);
        (
            (self.center_x + x * self.scale) as f32,
            (self.center_y - y * self.scale) as f32,
        )
    }
}

pub struct RenderMapEtl<'a> {
    config: &'a RenderConfig<'a>,
    font: fk::Font,
    projection: Projection,
    theme: &'a Theme<'a>,
}

impl RenderMapEtl<'_> {
    pub fn new<'a>(config: &'a RenderConfig<'a>) -> Result<RenderMapEtl<'a>> {
        // No bundled font: take whatever sans-serif the system offers. If
        // nothing can be selected the rendering backend is unusable and the
        // error propagates up.
        let font = fk::SystemSource::new()
            .select_best_match(&[fk::FamilyName::SansSerif], &fk::Properties::new())?
            .load()?;

        let projection = Projection::fit(
            MARGIN_LEFT,
            MARGIN_TOP,
            config.width_px as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            config.height_px as f64 - MARGIN_TOP - MARGIN_BOTTOM,
        );

        Ok(RenderMapEtl {
            config,
            font,
            projection,
            theme: &config.theme,
        })
    }

    fn output_path(dir: &Path) -> PathBuf {
        dir.join(OUTPUT_FILE_NAME)
    }

    fn stroke(width: f32) -> StrokeStyle {
        StrokeStyle {
            cap: LineCap::Round,
            join: LineJoin::Round,
            width,
            miter_limit: 2.0,
            dash_array: Vec::new(),
            dash_offset: 0.0,
        }
    }

    fn ring_path(&self, ring: world::Ring) -> raqote::Path {
        let mut pb = PathBuilder::new();
        let (x0, y0) = self.projection.project(ring[0].0, ring[0].1);
        pb.move_to(x0, y0);
        for (lon, lat) in &ring[1..] {
            let (x, y) = self.projection.project(*lon, *lat);
            pb.line_to(x, y);
        }
        pb.close();
        pb.finish()
    }

    /// The projected boundary of the whole globe, sampled along the
    /// antimeridians and the poles.
    fn globe_outline(&self) -> raqote::Path {
        let mut pb = PathBuilder::new();
        let (x0, y0) = self.projection.project(-180.0, -90.0);
        pb.move_to(x0, y0);
        let mut lat = -90;
        while lat <= 90 {
            let (x, y) = self.projection.project(-180.0, lat as f64);
            pb.line_to(x, y);
            lat += 3;
        }
        let mut lon = -180;
        while lon <= 180 {
            let (x, y) = self.projection.project(lon as f64, 90.0);
            pb.line_to(x, y);
            lon += 3;
        }
        let mut lat = 90;
        while lat >= -90 {
            let (x, y) = self.projection.project(180.0, lat as f64);
            pb.line_to(x, y);
            lat -= 3;
        }
        let mut lon = 180;
        while lon >= -180 {
            let (x, y) = self.projection.project(lon as f64, -90.0);
            pb.line_to(x, y);
            lon -= 3;
        }
        pb.close();
        pb.finish()
    }

    fn draw_basemap(&self, dt: &mut DrawTarget) {
        let draw_options = DrawOptions::new();

        let globe = self.globe_outline();
        dt.fill(&globe, &self.theme.lake_color, &draw_options);

        for &ring in world::land_polygons() {
            let path = self.ring_path(ring);
            dt.fill(&path, &self.theme.land_color, &draw_options);
            dt.stroke(&path, &self.theme.coastline_color, &Self::stroke(1.2), &draw_options);
        }
        for &ring in world::lake_polygons() {
            let path = self.ring_path(ring);
            dt.fill(&path, &self.theme.lake_color, &draw_options);
            dt.stroke(&path, &self.theme.coastline_color, &Self::stroke(1.0), &draw_options);
        }

        self.draw_graticule(dt);
        dt.stroke(&globe, &self.theme.country_color, &Self::stroke(1.5), &draw_options);
    }

    fn draw_graticule(&self, dt: &mut DrawTarget) {
        let draw_options = DrawOptions::new();
        let style = Self::stroke(0.8);

        let mut meridian = -150;
        while meridian <= 150 {
            let mut pb = PathBuilder::new();
            let (x0, y0) = self.projection.project(meridian as f64, -90.0);
            pb.move_to(x0, y0);
            let mut lat = -87;
            while lat <= 90 {
                let (x, y) = self.projection.project(meridian as f64, lat as f64);
                pb.line_to(x, y);
                lat += 3;
            }
            dt.stroke(&pb.finish(), &self.theme.country_color, &style, &draw_options);
            meridian += 30;
        }

        let mut parallel = -60;
        while parallel <= 60 {
            let mut pb = PathBuilder::new();
            let (x0, y0) = self.projection.project(-180.0, parallel as f64);
            pb.move_to(x0, y0);
            let mut lon = -177;
            while lon <= 180 {
                let (x, y) = self.projection.project(lon as f64, parallel as f64);
                pb.line_to(x, y);
                lon += 3;
            }
            dt.stroke(&pb.finish(), &self.theme.country_color, &style, &draw_options);
            parallel += 30;
        }
    }

    fn marker_source(t: f64) -> Source<'static> {
        let [r, g, b] = colormap::magma(t);
        Source::Solid(SolidSource::from_unpremultiplied_argb(0xff, r, g, b))
    }

    fn draw_marker(&self, dt: &mut DrawTarget, record: &LocationRecord, t: f64) {
        let (x, y) = self.projection.project(record.lon, record.lat);

        let mut pb = PathBuilder::new();
        pb.arc(x, y, MARKER_RADIUS, 0.0, 2.0 * std::f32::consts::PI);
        let circle = pb.finish();

        let draw_options = DrawOptions::new();
        dt.fill(&circle, &Self::marker_source(t), &draw_options);
        dt.stroke(&circle, &self.theme.marker_outline_color, &Self::stroke(1.5), &draw_options);

        self.draw_text(dt, x, y + MARKER_RADIUS + 16.0, 15.0, &record.name);
        let detail = format!("{}, {:.2} h", record.category.label(), record.travel_time);
        self.draw_text(dt, x, y + MARKER_RADIUS + 31.0, 12.0, &detail);
    }

    /// Draw `text` horizontally centered on `x`, using glyph advances scaled
    /// by the font's units-per-em.
    fn draw_text(
        &self,
        dt: &mut DrawTarget,
        x: f32,
        y: f32,
        point_size: f32,
        text: &str,
    ) {
        let source = &self.theme.text_color;
        let options = DrawOptions::new();
        let units_per_em = self.font.metrics().units_per_em as f32;
        let mut start = fk::vec2f(x, y);
        let mut ids = Vec::new();
        let mut positions = Vec::new();
        for c in text.chars() {
            let Some(id) = self.font.glyph_for_char(c) else { continue };
            let Ok(advance) = self.font.advance(id) else { continue };
            ids.push(id);
            positions.push(Point::new(start.x(), start.y()));
            start += advance * point_size / units_per_em;
        }
        if positions.is_empty() {
            return;
        }
        let total_width = start.x() - x;
        for position in &mut positions {
            position.x -= total_width * 0.5;
        }
        dt.draw_glyphs(&self.font, point_size, &ids, &positions, source, &options);
    }

    fn draw_colorbar(&self, dt: &mut DrawTarget, min_value: f64, max_value: f64) {
        let bar_x = self.config.width_px as f32 - 140.0;
        let bar_width = 22.0;
        let bar_top = MARGIN_TOP as f32 + 50.0;
        let bar_height = self.config.height_px as f32 - bar_top - 120.0;

        let draw_options = DrawOptions::new();

        // One strip per pixel row, max at the top.
        let mut row = 0.0;
        while row < bar_height {
            let t = 1.0 - (row / bar_height) as f64;
            dt.fill_rect(bar_x, bar_top + row, bar_width, 1.0, &Self::marker_source(t), &draw_options);
            row += 1.0;
        }

        let mut pb = PathBuilder::new();
        pb.rect(bar_x, bar_top, bar_width, bar_height);
        dt.stroke(&pb.finish(), &self.theme.coastline_color, &Self::stroke(1.0), &draw_options);

        let label_x = bar_x + bar_width / 2.0;
        self.draw_text(dt, label_x, bar_top - 24.0, 14.0, "Travel Time (hours)");
        self.draw_text(dt, label_x, bar_top - 8.0, 12.0, &format!("{:.2}", max_value));
        let mid = (min_value + max_value) / 2.0;
        self.draw_text(dt, label_x + bar_width, bar_top + bar_height / 2.0 + 4.0, 12.0, &format!("{:.2}", mid));
        self.draw_text(dt, label_x, bar_top + bar_height + 16.0, 12.0, &format!("{:.2}", min_value));
    }

    fn draw_title(&self, dt: &mut DrawTarget) {
        self.draw_text(
            dt,
            self.config.width_px as f32 / 2.0,
            52.0,
            24.0,
            &self.config.title,
        );
    }
}

impl Etl for RenderMapEtl<'_> {
    type Input = Vec<LocationRecord>;

    type Output = DrawTarget;

    fn etl_name(&self) -> &str {
        ETL_NAME
    }

    fn is_cached(&self, _dir: &Path) -> Result<bool> {
        // Inputs are in-memory literals, so a rerun always re-renders and
        // overwrites the previous image.
        Ok(false)
    }

    fn clean(&self, dir: &Path) -> Result<()> {
        let path = Self::output_path(dir);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn extract(&mut self, _dir: &Path) -> Result<Self::Input> {
        Ok(locations::build_dataset())
    }

    fn transform(&mut self, input: Self::Input) -> Result<Self::Output> {
        let mut dt = DrawTarget::new(
            self.config.width_px.try_into()?,
            self.config.height_px.try_into()?,
        );

        dt.clear(SolidSource::from_unpremultiplied_argb(
            0xff, 0xff, 0xff, 0xff,
        ));

        self.draw_basemap(&mut dt);

        // Color runs over the whole travel_time column, origin included.
        let min_value = input.iter().map(|r| r.travel_time).fold(f64::INFINITY, f64::min);
        let max_value = input.iter().map(|r| r.travel_time).fold(f64::NEG_INFINITY, f64::max);
        let span = max_value - min_value;

        for record in &input {
            let t = if span > 0.0 {
                (record.travel_time - min_value) / span
            } else {
                0.5
            };
            self.draw_marker(&mut dt, record, t);
        }

        self.draw_colorbar(&mut dt, min_value, max_value);
        self.draw_title(&mut dt);

        Ok(dt)
    }

    fn load(&mut self, dir: &Path, output: Self::Output) -> Result<()> {
        let file = File::create(Self::output_path(dir))?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(
            writer,
            self.config.width_px.try_into()?,
            self.config.height_px.try_into()?,
        );
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut png_writer = encoder.write_header()?;

        // raqote stores premultiplied ARGB words.
        let mut rgba = Vec::with_capacity(output.get_data().len() * 4);
        for pixel in output.get_data() {
            let a = (pixel >> 24) & 0xff;
            let mut r = (pixel >> 16) & 0xff;
            let mut g = (pixel >> 8) & 0xff;
            let mut b = pixel & 0xff;
            if a > 0 && a < 255 {
                r = (r * 255) / a;
                g = (g * 255) / a;
                b = (b * 255) / a;
            }
            rgba.extend_from_slice(&[r as u8, g as u8, b as u8, a as u8]);
        }
        png_writer.write_image_data(&rgba)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_centered() {
        let (x, y) = natural_earth_raw(0.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_projection_symmetry() {
        let (x_east, y_north) = natural_earth_raw(120.0, 45.0);
        let (x_west, y_south) = natural_earth_raw(-120.0, -45.0);
        assert!((x_east + x_west).abs() < 1e-12);
        assert!((y_north + y_south).abs() < 1e-12);
    }

    #[test]
    fn test_projection_narrows_toward_poles() {
        let (equator_x, _) = natural_earth_raw(180.0, 0.0);
        let (polar_x, _) = natural_earth_raw(180.0, 85.0);
        assert!(polar_x < equator_x);
        assert!(polar_x > 0.0);
    }

    #[test]
    fn test_fitted_projection_stays_in_rect() {
        let projection = Projection::fit(40.0, 90.0, 1370.0, 870.0);
        for &(lon, lat) in &[(-180.0, 0.0), (180.0, 0.0), (0.0, 90.0), (0.0, -90.0), (180.0, 90.0)] {
            let (x, y) = projection.project(lon, lat);
            assert!(x >= 40.0 - 0.5 && x <= 40.0 + 1370.0 + 0.5, "({lon}, {lat}) -> x {x}");
            assert!(y >= 90.0 - 0.5 && y <= 90.0 + 870.0 + 0.5, "({lon}, {lat}) -> y {y}");
        }
    }
}
