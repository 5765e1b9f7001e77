use battleship3d::{
    render_snapshot, Board, BoardBuilder, CellView, Coord, GameConfig, Orientation, VesselId,
    VesselKind,
};

/// A Jet at anchor (0, 0) on the air layer and the General at (2, 2) in the
/// deep sea. Ids: Jet #1, General #2.
fn board() -> Board {
    let config = GameConfig::new(4, 4)
        .with_count(VesselKind::Submarine, 0)
        .with_count(VesselKind::Destroyer, 0)
        .with_count(VesselKind::Jet, 1);
    let mut builder = BoardBuilder::new(config).unwrap();
    builder
        .place(VesselKind::Jet, Coord::new(0, 0, 2), Orientation::Unrotated)
        .unwrap();
    builder
        .place(VesselKind::General, Coord::new(2, 2, 0), Orientation::Unrotated)
        .unwrap();
    builder.finish().unwrap()
}

#[test]
fn test_revealed_snapshot() {
    let mut board = board();
    board.fire_at(Coord::new(1, 1, 2)).unwrap();
    board.fire_at(Coord::new(3, 3, 1)).unwrap();
    let snapshot = board.snapshot();

    assert_eq!(snapshot.layers.len(), 3);
    assert_eq!(snapshot.layers[0].name, "Deep Sea");
    assert_eq!(snapshot.layers[2].name, "Air");
    assert_eq!(snapshot.cell(0, 0, 2), Some(CellView::Empty), "hole in the Jet mask");
    assert_eq!(
        snapshot.cell(0, 1, 2),
        Some(CellView::Vessel {
            id: VesselId(1),
            kind: VesselKind::Jet,
            hit: false,
            destroyed: false
        })
    );
    assert_eq!(snapshot.cell(3, 3, 1), Some(CellView::Miss));
    assert_eq!(snapshot.cell(4, 0, 0), None);

    let values = snapshot.values();
    assert_eq!(values[2][0][1], Some(1.0));
    assert_eq!(values[2][1][1], Some(1.5));
    assert_eq!(values[2][0][0], None);
    assert_eq!(values[0][2][2], Some(2.0));
}

#[test]
fn test_concealed_snapshot_hides_intact_cells() {
    let mut board = board();
    board.fire_at(Coord::new(1, 1, 2)).unwrap();
    board.fire_at(Coord::new(0, 0, 0)).unwrap();
    let snapshot = board.concealed_snapshot();

    assert_eq!(snapshot.cell(2, 2, 0), Some(CellView::Unknown));
    assert_eq!(snapshot.cell(3, 3, 0), Some(CellView::Unknown));
    assert_eq!(snapshot.cell(0, 0, 0), Some(CellView::Miss));
    assert!(matches!(
        snapshot.cell(1, 1, 2),
        Some(CellView::Vessel { hit: true, .. })
    ));
    let visible = snapshot
        .values()
        .iter()
        .flatten()
        .flatten()
        .filter(|v| v.is_some())
        .count();
    assert_eq!(visible, 1);
}

#[test]
fn test_snapshot_is_detached_from_board() {
    let mut board = board();
    let before = board.snapshot();
    board.fire_at(Coord::new(2, 2, 0)).unwrap();
    assert_ne!(before, board.snapshot());
    assert_eq!(before.cell(2, 2, 0).and_then(|c| c.value()), Some(2.0));
}

#[test]
fn test_render_snapshot() {
    let mut board = board();
    board.fire_at(Coord::new(2, 2, 0)).unwrap();
    board.fire_at(Coord::new(1, 1, 2)).unwrap();
    board.fire_at(Coord::new(3, 0, 1)).unwrap();
    let text = render_snapshot(&board.snapshot());

    assert!(text.contains("Layer 0: Deep Sea"));
    assert!(text.contains("Layer 1: Sea Level"));
    assert!(text.contains("Layer 2: Air"));
    assert!(text.contains("legend"));
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.contains(&" 2   .  .  #  ."), "destroyed General in the deep sea");
    assert!(lines.contains(&" 3   o  .  .  ."), "miss at sea level");
    assert!(lines.contains(&" 1  jt  X jt  ."), "Jet with one hit segment");
    assert!(lines.contains(&"     0  1  2  3"));
    assert_eq!(text.lines().filter(|l| l.starts_with(" 3 ")).count(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_json() {
    let board = board();
    let json = serde_json::to_value(board.snapshot()).unwrap();
    assert_eq!(json["dimensions"]["rows"], 4);
    assert_eq!(json["layers"][2]["name"], "Air");
    assert_eq!(json["layers"][0]["cells"][0][0], "Empty");
    assert_eq!(json["layers"][2]["cells"][0][1]["Vessel"]["kind"], "Jet");
    assert_eq!(json["layers"][2]["cells"][0][1]["Vessel"]["id"], 1);
}
