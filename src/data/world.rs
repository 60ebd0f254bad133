/// Coarse basemap geometry: landmass and lake outlines as (lon, lat) rings.
/// Hand-simplified to a few dozen vertices per landmass, which is plenty at
/// world scale on a 1600px canvas.

pub type Ring = &'static [(f64, f64)];

const NORTH_AMERICA: Ring = &[
    (-168.0, 65.5), (-165.0, 60.0), (-155.0, 57.0), (-145.0, 60.0), (-135.0, 57.0),
    (-128.0, 52.0), (-124.0, 47.0), (-123.0, 39.0), (-117.0, 32.0), (-110.0, 26.0),
    (-105.0, 22.0), (-97.0, 20.0), (-92.0, 17.0), (-87.0, 14.0), (-83.0, 9.0),
    (-79.0, 9.0), (-82.0, 14.0), (-87.0, 21.0), (-90.0, 21.5), (-97.0, 25.0),
    (-94.0, 29.5), (-89.0, 29.0), (-84.0, 29.5), (-81.0, 25.0), (-80.0, 32.0),
    (-76.0, 35.0), (-70.0, 41.5), (-66.0, 44.5), (-60.0, 46.0), (-65.0, 50.0),
    (-57.0, 52.0), (-60.0, 55.0), (-64.0, 60.0), (-70.0, 62.0), (-78.0, 63.0),
    (-85.0, 66.0), (-95.0, 68.0), (-110.0, 68.5), (-125.0, 69.5), (-140.0, 69.5),
    (-155.0, 71.0), (-165.0, 68.0),
];

const GREENLAND: Ring = &[
    (-45.0, 60.0), (-53.0, 66.0), (-55.0, 70.0), (-58.0, 75.0), (-68.0, 76.0),
    (-60.0, 81.0), (-45.0, 82.0), (-30.0, 82.5), (-20.0, 79.0), (-22.0, 74.0),
    (-25.0, 70.0), (-32.0, 66.0), (-40.0, 62.0),
];

const SOUTH_AMERICA: Ring = &[
    (-77.0, 8.0), (-75.0, 10.5), (-72.0, 12.0), (-64.0, 10.5), (-60.0, 8.5),
    (-52.0, 5.0), (-50.0, 0.0), (-44.0, -2.5), (-38.0, -4.5), (-35.0, -7.0),
    (-38.0, -13.0), (-40.0, -20.0), (-48.0, -26.0), (-53.0, -33.0), (-58.0, -38.0),
    (-62.0, -40.5), (-65.0, -45.0), (-68.0, -50.0), (-69.0, -54.5), (-72.0, -52.0),
    (-74.0, -46.0), (-73.0, -40.0), (-71.0, -33.0), (-70.0, -25.0), (-70.0, -18.0),
    (-75.0, -14.0), (-79.0, -7.0), (-81.0, -4.5), (-80.0, 0.5), (-77.0, 3.5),
];

const AFRICA: Ring = &[
    (-6.0, 35.5), (-10.0, 31.0), (-15.0, 27.0), (-17.0, 21.0), (-16.0, 15.0),
    (-12.0, 9.0), (-8.0, 5.0), (0.0, 5.5), (6.0, 4.5), (9.0, 4.0),
    (9.5, -1.0), (12.0, -6.0), (13.0, -12.0), (14.0, -17.0), (14.5, -23.0),
    (16.0, -28.5), (19.0, -34.5), (24.0, -34.5), (28.0, -32.5), (32.5, -28.5),
    (35.0, -23.0), (36.5, -17.5), (39.0, -11.0), (40.5, -5.0), (42.0, 0.0),
    (48.0, 4.5), (51.0, 11.5), (44.0, 11.0), (40.0, 15.0), (37.5, 18.5),
    (34.5, 27.5), (32.5, 31.0), (25.0, 32.0), (18.0, 30.5), (10.5, 33.5),
    (0.0, 36.5),
];

const EURASIA: Ring = &[
    (-9.5, 43.0), (-9.0, 37.0), (-5.0, 36.0), (0.0, 38.5), (3.0, 42.0),
    (7.5, 43.5), (12.5, 44.0), (15.5, 40.0), (19.0, 40.5), (23.0, 37.5),
    (27.0, 38.0), (30.5, 36.5), (36.0, 36.0), (34.5, 31.5), (34.5, 29.0),
    (38.5, 21.5), (43.5, 12.5), (52.0, 16.5), (59.5, 22.5), (56.5, 27.0),
    (50.0, 29.5), (55.0, 26.0), (61.5, 25.0), (66.5, 24.5), (70.5, 21.0),
    (72.5, 19.0), (74.0, 13.0), (77.5, 8.0), (80.5, 13.5), (84.0, 19.0),
    (88.5, 21.5), (92.0, 20.5), (94.5, 16.0), (98.5, 8.5), (101.5, 3.0),
    (103.5, 1.5), (105.0, 10.0), (107.5, 16.0), (109.0, 19.5), (113.5, 22.0),
    (117.5, 24.0), (121.0, 30.0), (122.0, 37.0), (126.5, 35.0), (129.5, 36.5),
    (131.5, 43.0), (135.5, 45.5), (140.5, 54.0), (143.0, 59.0), (153.0, 59.5),
    (160.0, 60.5), (170.0, 64.5), (178.5, 66.0), (170.0, 70.0), (160.0, 70.5),
    (140.0, 73.0), (120.0, 73.5), (100.0, 77.0), (80.0, 73.0), (60.0, 69.0),
    (45.0, 68.0), (40.0, 66.5), (30.0, 70.0), (20.0, 70.5), (12.0, 65.0),
    (5.0, 62.0), (6.5, 58.0), (8.5, 54.5), (4.0, 52.0), (0.0, 49.5),
    (-2.0, 48.5), (-4.5, 48.0), (-1.0, 46.0), (-2.0, 43.5),
];

const AUSTRALIA: Ring = &[
    (114.0, -22.0), (114.0, -26.0), (115.5, -34.0), (119.0, -35.0), (124.0, -33.0),
    (130.0, -32.0), (136.0, -35.0), (140.0, -38.0), (147.0, -39.0), (150.0, -37.0),
    (153.0, -30.0), (153.5, -25.0), (149.0, -20.0), (145.5, -15.0), (142.5, -11.0),
    (139.5, -17.0), (136.0, -12.5), (132.0, -11.5), (126.0, -14.0), (122.0, -17.5),
];

const ANTARCTICA: Ring = &[
    (-179.0, -73.0), (-150.0, -76.0), (-120.0, -74.0), (-90.0, -73.0), (-65.0, -66.0),
    (-55.0, -64.0), (-58.0, -72.0), (-30.0, -72.0), (0.0, -70.0), (30.0, -69.0),
    (60.0, -67.0), (90.0, -66.0), (120.0, -66.5), (150.0, -69.0), (179.0, -71.0),
    (179.0, -84.0), (-179.0, -84.0),
];

const GREAT_LAKES: Ring = &[
    (-92.0, 46.8), (-88.0, 48.2), (-84.0, 46.5), (-79.0, 43.5), (-76.5, 43.7),
    (-79.0, 42.5), (-83.0, 41.8), (-87.0, 41.7), (-88.0, 44.0),
];

const CASPIAN_SEA: Ring = &[
    (50.0, 47.0), (54.0, 46.0), (54.0, 42.0), (53.0, 37.0), (49.0, 37.0),
    (48.0, 40.0), (47.0, 44.0),
];

pub fn land_polygons() -> &'static [Ring] {
    &[
        NORTH_AMERICA,
        GREENLAND,
        SOUTH_AMERICA,
        AFRICA,
        EURASIA,
        AUSTRALIA,
        ANTARCTICA,
    ]
}

pub fn lake_polygons() -> &'static [Ring] {
    &[GREAT_LAKES, CASPIAN_SEA]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_are_drawable() {
        for ring in land_polygons().iter().chain(lake_polygons()) {
            assert!(ring.len() >= 3);
        }
    }

    #[test]
    fn test_coordinates_in_bounds() {
        for ring in land_polygons().iter().chain(lake_polygons()) {
            for (lon, lat) in ring.iter() {
                assert!((-180.0..=180.0).contains(lon));
                assert!((-90.0..=90.0).contains(lat));
            }
        }
    }
}
