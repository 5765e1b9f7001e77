use battleship3d::{GameConfig, Mask, Orientation, VesselKind, VesselType, GENERAL_LAYERS};

#[test]
fn test_standard_footprints() {
    assert_eq!(VesselKind::Submarine.mask().footprint(), 3);
    assert_eq!(VesselKind::Destroyer.mask().footprint(), 4);
    assert_eq!(VesselKind::Jet.mask().footprint(), 6);
    assert_eq!(VesselKind::General.mask().footprint(), 1);
}

#[test]
fn test_jet_mask_shape() {
    let jet = VesselKind::Jet.mask();
    assert_eq!((jet.height(), jet.width()), (4, 3));
    let offsets: Vec<_> = jet.offsets().collect();
    assert_eq!(offsets, vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (3, 1)]);
    assert!(!jet.is_occupied(0, 0));
    assert!(!jet.is_occupied(3, 2));
    assert!(!jet.is_occupied(4, 1), "outside the bounding box");
}

#[test]
fn test_rotation_is_clockwise() {
    let jet = VesselKind::Jet.mask().rotated();
    assert_eq!((jet.height(), jet.width()), (3, 4));
    let offsets: Vec<_> = jet.offsets().collect();
    // nose points right, tail to the left
    assert_eq!(offsets, vec![(0, 2), (1, 0), (1, 1), (1, 2), (1, 3), (2, 2)]);
    assert_eq!(jet.footprint(), 6);

    let back = jet.rotated().rotated().rotated();
    assert_eq!(back, VesselKind::Jet.mask());
}

#[test]
fn test_oriented_line() {
    let sub = VesselKind::Submarine.mask();
    assert_eq!(sub.oriented(Orientation::Unrotated), sub);
    let vertical = sub.oriented(Orientation::Rotated);
    assert_eq!((vertical.height(), vertical.width()), (3, 1));
    assert_eq!(vertical.offsets().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn test_mask_from_ragged_rows() {
    let mask = Mask::from_rows(&[&[1], &[1, 0, 1]]);
    assert_eq!((mask.height(), mask.width()), (2, 3));
    assert_eq!(mask.footprint(), 3);
    assert!(!mask.is_occupied(0, 2));
}

#[test]
fn test_vessel_kind_parse_and_display() {
    assert_eq!("submarine".parse::<VesselKind>(), Ok(VesselKind::Submarine));
    assert_eq!(" JET ".parse::<VesselKind>(), Ok(VesselKind::Jet));
    assert_eq!("dd".parse::<VesselKind>(), Ok(VesselKind::Destroyer));
    assert!("carrier".parse::<VesselKind>().is_err());
    assert_eq!(VesselKind::General.to_string(), "General");
    assert_eq!(VesselKind::FLEET.len(), 3);
    assert!(!VesselKind::FLEET.contains(&VesselKind::General));
}

#[test]
fn test_standard_vessel_table() {
    let config = GameConfig::default();
    let sub = config.vessel_type(VesselKind::Submarine).unwrap();
    assert_eq!(sub.layers(), &[0]);
    assert_eq!(sub.count(), 2);
    assert_eq!(config.vessel_type(VesselKind::Destroyer).unwrap().layers(), &[1]);
    assert_eq!(config.count(VesselKind::Jet), 1);
    assert_eq!(config.count(VesselKind::General), 1);
    assert!(config.vessel_type(VesselKind::General).is_none());

    let general = VesselType::standard(VesselKind::General);
    assert_eq!(general.layers(), &GENERAL_LAYERS);
    assert!(general.permits_layer(1));
    assert!(!general.permits_layer(2));
}
