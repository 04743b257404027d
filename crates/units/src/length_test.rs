mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_TO_KM, AU_TO_M};

    #[test]
    fn test_length_conversions() {
        // Test AU to meters
        let earth_orbit = Length::from_au(1.0);
        assert_relative_eq!(earth_orbit.to_m(), AU_TO_M);
        assert_relative_eq!(earth_orbit.to_km(), AU_TO_KM);

        // Test meters to AU
        let one_au = Length::from_m(AU_TO_M);
        assert_relative_eq!(one_au.to_au(), 1.0);

        // Test kilometers
        let km = Length::from_km(149_600_000.0);
        assert_relative_eq!(km.to_au(), 1.0);
        assert_relative_eq!(km.to_m(), AU_TO_M);
    }

    #[test]
    fn test_length_arithmetic() {
        let a = Length::from_au(1.0);
        let b = Length::from_au(0.5);

        assert_relative_eq!((a + b).to_au(), 1.5);
        assert_relative_eq!((a - b).to_au(), 0.5);
        assert_relative_eq!((a * 2.0).to_au(), 2.0);
        assert_relative_eq!((a / 2.0).to_au(), 0.5);

        // Length / Length is a dimensionless ratio
        assert_relative_eq!(a / b, 2.0);
    }

    #[test]
    fn test_length_min_max() {
        let a = Length::from_au(1.0);
        let b = Length::from_au(5.2);

        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }
}
