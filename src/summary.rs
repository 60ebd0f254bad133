use crate::data::locations::{Category, LocationRecord};

/// Counts and travel-time range for the console printout. The range covers
/// only the substantive records; the origin's 0.0 would be noise there.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub batman_locations: usize,
    pub supercar_factories: usize,
    pub origins: usize,
    pub min_travel_time: f64,
    pub max_travel_time: f64,
}

pub fn summarize(records: &[LocationRecord]) -> Summary {
    let batman_locations = records.iter().filter(|r| r.category == Category::BatmanLocation).count();
    let supercar_factories = records.iter().filter(|r| r.category == Category::SupercarFactory).count();
    let origins = records.iter().filter(|r| r.category == Category::Origin).count();

    let substantive = records.iter().filter(|r| r.category != Category::Origin);
    let min_travel_time = substantive.clone().map(|r| r.travel_time).fold(f64::INFINITY, f64::min);
    let max_travel_time = substantive.map(|r| r.travel_time).fold(f64::NEG_INFINITY, f64::max);

    Summary {
        total: records.len(),
        batman_locations,
        supercar_factories,
        origins,
        min_travel_time,
        max_travel_time,
    }
}

pub fn print_summary(summary: &Summary) {
    println!();
    println!("Total locations: {}", summary.total);
    println!("Batman filming locations: {}", summary.batman_locations);
    println!("Supercar factories: {}", summary.supercar_factories);
    println!();
    println!(
        "Travel times range from {:.2} to {:.2} hours",
        summary.min_travel_time, summary.max_travel_time
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locations::build_dataset;

    #[test]
    fn test_summary_counts() {
        let summary = summarize(&build_dataset());
        assert_eq!(summary.total, 8);
        assert_eq!(summary.batman_locations, 4);
        assert_eq!(summary.supercar_factories, 3);
        assert_eq!(summary.origins, 1);
    }

    #[test]
    fn test_summary_range_excludes_origin() {
        let summary = summarize(&build_dataset());
        assert_eq!(summary.min_travel_time, 1.75);
        assert_eq!(summary.max_travel_time, 10.72);
    }
}
