/// The fixed table of points we plot: Batman filming locations and supercar
/// factories, plus the Gotham City origin all travel times are measured from.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    BatmanLocation,
    SupercarFactory,
    Origin,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::BatmanLocation => "Batman Location",
            Category::SupercarFactory => "Supercar Factory",
            Category::Origin => "Origin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    // Hours by cargo plane from Gotham. Curated estimates, not computed.
    pub travel_time: f64,
    pub category: Category,
}

impl LocationRecord {
    fn new(name: &str, lat: f64, lon: f64, travel_time: f64, category: Category) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            lat,
            lon,
            travel_time,
            category,
        }
    }
}

fn substantive_records() -> Vec<LocationRecord> {
    use Category::{BatmanLocation, SupercarFactory};
    vec![
        LocationRecord::new("Chicago Board of Trade (Batman Begins)", 41.877453, -87.631989, 2.68, BatmanLocation),
        LocationRecord::new("Royal Liver Building Liverpool (The Batman)", 53.405823, -2.995956, 8.81, BatmanLocation),
        LocationRecord::new("Pinewood Studios (Batman 1989)", 51.548592, -0.535414, 9.13, BatmanLocation),
        LocationRecord::new("Heinz Field Pittsburgh (Dark Knight Rises)", 40.446765, -80.01576, 1.75, BatmanLocation),
        LocationRecord::new("Ferrari Factory - Maranello, Italy", 44.5311, 10.8661, 10.72, SupercarFactory),
        LocationRecord::new("McLaren Technology Centre - Woking, UK", 51.3408, -0.5423, 9.14, SupercarFactory),
        LocationRecord::new("Bugatti Factory - Molsheim, France", 48.522, 7.5002, 10.09, SupercarFactory),
    ]
}

fn origin_record() -> LocationRecord {
    LocationRecord::new("Gotham City (Origin)", 40.7128, -74.0060, 0.0, Category::Origin)
}

/// All records to plot, origin last. Pure literal construction.
pub fn build_dataset() -> Vec<LocationRecord> {
    let mut records = substantive_records();
    records.push(origin_record());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let records = build_dataset();
        assert_eq!(records.len(), 8);
        let origins = records.iter().filter(|r| r.category == Category::Origin).count();
        assert_eq!(origins, 1);
        assert_eq!(records.last().unwrap().name, "Gotham City (Origin)");
    }

    #[test]
    fn test_category_counts() {
        let records = build_dataset();
        let batman = records.iter().filter(|r| r.category == Category::BatmanLocation).count();
        let factories = records.iter().filter(|r| r.category == Category::SupercarFactory).count();
        assert_eq!(batman, 4);
        assert_eq!(factories, 3);
    }

    #[test]
    fn test_coordinates_in_bounds() {
        for record in build_dataset() {
            assert!((-90.0..=90.0).contains(&record.lat), "{}", record.name);
            assert!((-180.0..=180.0).contains(&record.lon), "{}", record.name);
            assert!(record.travel_time >= 0.0, "{}", record.name);
        }
    }

    #[test]
    fn test_travel_time_extremes() {
        let records = build_dataset();
        let substantive: Vec<_> = records.iter()
            .filter(|r| r.category != Category::Origin)
            .collect();
        let min = substantive.iter().map(|r| r.travel_time).fold(f64::INFINITY, f64::min);
        let max = substantive.iter().map(|r| r.travel_time).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 1.75);
        assert_eq!(max, 10.72);
    }

    #[test]
    fn test_deterministic_construction() {
        assert_eq!(build_dataset(), build_dataset());
    }
}
