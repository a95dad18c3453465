//! Tests for grid coordinates

#[cfg(test)]
mod tests {
    use cladtile::spatial::coordinate::GridCoordinate;
    use cladtile::spatial::direction::Direction;
    use std::collections::HashSet;

    // Tests value equality and hashing
    // Verified by leaving y out of the derived comparison
    #[test]
    fn test_value_semantics() {
        let a = GridCoordinate::new(1, 2, 3);
        let b = GridCoordinate::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, GridCoordinate::new(1, 0, 3));

        let set: HashSet<_> = [a, b, GridCoordinate::ZERO].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    // Tests neighbour offsets keep the layer
    // Verified by adding the z offset to y
    #[test]
    fn test_offset_stays_on_layer() {
        let origin = GridCoordinate::new(0, 5, 0);
        assert_eq!(origin.offset(Direction::North), GridCoordinate::new(0, 5, 1));
        assert_eq!(origin.offset(Direction::SouthEast), GridCoordinate::new(1, 5, -1));
        assert!(origin.neighbours().all(|(_, n)| n.y == 5));
    }

    // Tests the eight neighbours are distinct and clockwise
    // Verified by skipping diagonal neighbours
    #[test]
    fn test_neighbours() {
        let neighbours: Vec<_> = GridCoordinate::ZERO.neighbours().collect();
        assert_eq!(neighbours.len(), 8);
        assert_eq!(neighbours.first(), Some(&(Direction::North, GridCoordinate::UNIT_Z)));

        let distinct: HashSet<_> = neighbours.iter().map(|(_, c)| *c).collect();
        assert_eq!(distinct.len(), 8);
        assert!(!distinct.contains(&GridCoordinate::ZERO));
    }

    // Tests arithmetic operators
    // Verified by subtracting in Add
    #[test]
    fn test_arithmetic() {
        let a = GridCoordinate::new(1, 2, 3);
        assert_eq!(a + GridCoordinate::UNIT_X, GridCoordinate::new(2, 2, 3));
        assert_eq!(a - a, GridCoordinate::ZERO);
        assert_eq!(-a, GridCoordinate::new(-1, -2, -3));
        assert_eq!(a * 2, GridCoordinate::new(2, 4, 6));
        assert_eq!(GridCoordinate::UNIT_Y * 3, GridCoordinate::new(0, 3, 0));
    }

    // Tests world positions scale each axis independently
    // Verified by applying the x scale to every axis
    #[test]
    fn test_to_world() {
        let world = GridCoordinate::new(2, -1, 3).to_world([0.5, 2.0, 1.0]);
        assert!((world[0] - 1.0).abs() < f32::EPSILON);
        assert!((world[1] + 2.0).abs() < f32::EPSILON);
        assert!((world[2] - 3.0).abs() < f32::EPSILON);
    }

    // Tests display format
    // Verified by dropping the braces
    #[test]
    fn test_display() {
        assert_eq!(GridCoordinate::new(-1, 0, 7).to_string(), "{X:-1 Y:0 Z:7}");
    }
}
