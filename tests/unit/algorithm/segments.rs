//! Tests for segment identifiers, segment sets and visibility

#[cfg(test)]
mod tests {
    use cladtile::algorithm::segments::{
        MESH_GROUP_COUNT, MeshGroup, SEGMENT_COUNT, SegmentId, SegmentSet, SegmentVisibility,
    };
    use cladtile::spatial::direction::Direction;

    // Tests segments are indexed clockwise from NNE
    // Verified by swapping SEE and SSE in ALL
    #[test]
    fn test_segment_order() {
        for (index, segment) in SegmentId::ALL.into_iter().enumerate() {
            assert_eq!(segment.index(), index);
            assert_eq!(SegmentId::from_index(index), segment);
        }
        let labels: Vec<&str> = SegmentId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["NNE", "NEE", "SEE", "SSE", "SSW", "SWW", "NWW", "NNW"]
        );
    }

    // Tests a quarter turn moves a segment onto the next face
    // Verified by rotating one octant per quarter turn
    #[test]
    fn test_segment_rotation() {
        assert_eq!(SegmentId::Nne.rotated(1), SegmentId::See);
        assert_eq!(SegmentId::Nnw.rotated(1), SegmentId::Nee);
        assert_eq!(SegmentId::Sww.rotated(2), SegmentId::Nee);
        for segment in SegmentId::ALL {
            assert_eq!(segment.rotated(4), segment);
            assert_eq!(segment.rotated(1).face(), segment.face().rotated(1));
            assert_eq!(segment.rotated(1).corner(), segment.corner().rotated(1));
        }
    }

    // Tests faces and corners of segments
    // Verified by assigning NEE to the north face
    #[test]
    fn test_segment_face_and_corner() {
        assert_eq!(SegmentId::Nne.face(), Direction::North);
        assert_eq!(SegmentId::Nee.face(), Direction::East);
        assert_eq!(SegmentId::Nee.corner(), Direction::NorthEast);
        assert_eq!(SegmentId::Ssw.corner(), Direction::SouthWest);
        for corner in Direction::DIAGONALS {
            let in_quadrant = SegmentId::ALL.iter().filter(|s| s.corner() == corner).count();
            assert_eq!(in_quadrant, 2);
        }
    }

    // Tests set insertion reports new members only
    // Verified by always returning true from insert
    #[test]
    fn test_segment_set_insert() {
        let mut set = SegmentSet::new();
        assert!(set.is_empty());
        assert!(set.insert(SegmentId::See));
        assert!(!set.insert(SegmentId::See));
        assert!(set.insert(SegmentId::Nnw));
        assert_eq!(set.count(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![SegmentId::See, SegmentId::Nnw]
        );

        set.clear();
        assert!(set.is_empty());
        assert_eq!(SegmentSet::all().count(), SEGMENT_COUNT);
    }

    // Tests set rotation moves every member
    // Verified by returning the set unchanged
    #[test]
    fn test_segment_set_rotation() {
        let set: SegmentSet = [SegmentId::Nne, SegmentId::Ssw].into_iter().collect();
        let turned: SegmentSet = [SegmentId::See, SegmentId::Nww].into_iter().collect();
        assert_eq!(set.rotated(1), turned);
        assert_eq!(SegmentSet::all().rotated(3), SegmentSet::all());
    }

    // Tests visibility keeps groups independent
    // Verified by sharing one set between all groups
    #[test]
    fn test_visibility_groups_are_independent() {
        let mut visibility = SegmentVisibility::new();
        visibility.show(MeshGroup::Cladding3, SegmentId::See);
        visibility.show(MeshGroup::Cladding1, SegmentId::See);

        assert!(visibility.is_visible(MeshGroup::Cladding3, SegmentId::See));
        assert!(!visibility.is_visible(MeshGroup::Cladding4, SegmentId::See));
        assert_eq!(
            visibility.groups_showing(SegmentId::See).collect::<Vec<_>>(),
            vec![MeshGroup::Cladding1, MeshGroup::Cladding3]
        );
        assert_eq!(visibility.total_visible(), 2);
    }

    // Tests enabling and disabling whole groups
    // Verified by clearing only the core group in disable_all
    #[test]
    fn test_visibility_enable_and_disable_all() {
        let mut visibility = SegmentVisibility::new();
        visibility.enable_all(MeshGroup::Core);
        visibility.show(MeshGroup::Cladding5, SegmentId::Nee);
        assert_eq!(visibility.group(MeshGroup::Core).count(), SEGMENT_COUNT);
        assert_eq!(visibility.total_visible(), SEGMENT_COUNT + 1);

        visibility.disable_all();
        assert!(visibility.is_empty());
        assert_eq!(visibility, SegmentVisibility::default());
    }

    // Tests mesh groups are listed in layer order
    // Verified by reordering the group enum
    #[test]
    fn test_mesh_group_order() {
        assert_eq!(MeshGroup::ALL.len(), MESH_GROUP_COUNT);
        assert_eq!(MeshGroup::Core.index(), 0);
        assert_eq!(MeshGroup::Cladding5.index(), 5);
        assert_eq!(MeshGroup::Cladding2.to_string(), "Cladding2");
    }

    // Tests debug output lists only visible groups
    // Verified by printing empty groups
    #[test]
    fn test_visibility_debug_skips_empty_groups() {
        let mut visibility = SegmentVisibility::new();
        visibility.show(MeshGroup::Cladding2, SegmentId::Nee);
        let text = format!("{visibility:?}");
        assert!(text.contains("Cladding2"));
        assert!(!text.contains("Core"));
    }
}
