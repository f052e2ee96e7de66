//! Parse a multi-entry catalog feed the way it is published: satellite name
//! followed by the two element lines, entries separated by blank lines.

use tle::{parse_element_set, parse_tle_set};

const FEED: &str = include_str!("../test_fixtures/geo_feed.txt");

#[test]
fn feed_round_trip() {
    let tles = parse_tle_set(FEED).unwrap();
    assert_eq!(tles.len(), 3);

    let names: Vec<&str> = tles.iter().map(|t| t.satellite_name.as_str()).collect();
    assert_eq!(names, ["GEO1", "GEO2", "ISS (ZARYA)"]);

    for tle in &tles {
        let elements = parse_element_set(&tle.line1, &tle.line2).unwrap();
        assert!(elements.mean_motion > 0.0);
        assert!((0.0..1.0).contains(&elements.eccentricity));
        assert!((0.0..=180.0).contains(&elements.inclination));
    }

    // The two geostationary entries turn roughly once per day, the station
    // is a fast mover
    let geo1 = parse_element_set(&tles[0].line1, &tles[0].line2).unwrap();
    let iss = parse_element_set(&tles[2].line1, &tles[2].line2).unwrap();
    assert!((geo1.mean_motion - 1.0).abs() < 0.1);
    assert!(iss.mean_motion > 15.0);
}
