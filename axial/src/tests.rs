use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

struct Items {
    sizes: Vec<Vector3>,
}

impl Items {
    fn column(heights: &[f32]) -> Self {
        Self {
            sizes: heights.iter().map(|&h| Vector3::new(5.0, h, 1.0)).collect(),
        }
    }
}

impl ItemSource for Items {
    fn item_count(&self) -> usize {
        self.sizes.len()
    }

    fn measure(&mut self, data_index: usize) -> Vector3 {
        self.sizes[data_index]
    }
}

fn cache_with_sizes(sizes: &[f32]) -> GeometryCache {
    let mut cache = GeometryCache::new();
    for (i, &size) in sizes.iter().enumerate() {
        cache.add_data(i, i, size, 0.0, 0.0).unwrap();
    }
    cache
}

fn offsets(cache: &GeometryCache) -> Vec<f32> {
    cache.iter().map(|r| r.offset).collect()
}

fn assert_dense(cache: &GeometryCache) {
    for (pos, r) in cache.iter().enumerate() {
        assert_eq!(r.position, pos);
        assert_eq!(cache.position_of(r.id), Some(pos));
        assert_eq!(cache.id_at(pos), Some(r.id));
    }
}

fn column_layout(heights: &[f32], viewport: f32) -> LinearLayout {
    let mut layout = LinearLayout::new(
        LayoutOptions::new(Orientation::Vertical).with_viewport(Vector3::new(50.0, viewport, 0.0)),
    )
    .unwrap();
    let mut items = Items::column(heights);
    for i in 0..heights.len() {
        let size = items.measure(i);
        layout.measure_child(i, size).unwrap();
    }
    layout
}

#[test]
fn add_data_appends_and_returns_leading_offsets() {
    let mut cache = GeometryCache::new();
    assert_eq!(cache.add_data(0, 0, 10.0, 0.0, 0.0), Ok(0.0));
    assert_eq!(cache.add_data(1, 1, 20.0, 0.0, 0.0), Ok(10.0));
    assert_eq!(cache.add_data(2, 2, 5.0, 0.0, 0.0), Ok(30.0));
    assert_eq!(cache.count(), 3);
    assert_eq!(cache.total_size(), 35.0);
    assert_eq!(cache.end_data_offset(2), Ok(35.0));
}

#[test]
fn insert_in_the_middle_shifts_following_records() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    assert_eq!(cache.add_data(9, 1, 4.0, 0.0, 0.0), Ok(10.0));

    assert_eq!(cache.id_at(1), Some(9));
    assert_eq!(cache.position_of(1), Some(2));
    assert_eq!(offsets(&cache), vec![0.0, 10.0, 14.0, 34.0]);
    assert_dense(&cache);
}

#[test]
fn remeasure_in_place_moves_only_following_records() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    assert_eq!(cache.add_data(1, 1, 25.0, 0.0, 0.0), Ok(10.0));
    assert_eq!(offsets(&cache), vec![0.0, 10.0, 35.0]);
    assert_eq!(cache.count(), 3);
}

#[test]
fn add_data_rejects_duplicates_and_gaps() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    assert_eq!(
        cache.add_data(1, 0, 3.0, 0.0, 0.0),
        Err(LayoutError::DuplicateId { id: 1, position: 1 })
    );
    assert_eq!(
        cache.add_data(7, 5, 3.0, 0.0, 0.0),
        Err(LayoutError::PositionOutOfRange {
            position: 5,
            count: 3
        })
    );
    assert!(matches!(
        cache.add_data(8, 3, -1.0, 0.0, 0.0),
        Err(LayoutError::InvalidGeometry { id: 8, .. })
    ));
    assert!(matches!(
        cache.add_data(8, 3, 1.0, f32::NAN, 0.0),
        Err(LayoutError::InvalidGeometry { id: 8, .. })
    ));
    assert_eq!(cache.count(), 3);
    assert_dense(&cache);
}

#[test]
fn unmeasured_size_is_accepted_and_poisons_the_total() {
    let mut cache = cache_with_sizes(&[10.0]);
    assert_eq!(cache.add_data(1, 1, f32::NAN, 0.0, 0.0), Ok(10.0));
    assert!(cache.total_size().is_nan());
    assert!(!cache.is_measured());

    cache.add_data(1, 1, 4.0, 0.0, 0.0).unwrap();
    assert_eq!(cache.total_size(), 14.0);
    assert!(cache.is_measured());
}

#[test]
fn remove_data_closes_the_gap() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    let removed = cache.remove_data(1).unwrap();
    assert_eq!(removed.size, 20.0);

    assert_eq!(cache.count(), 2);
    assert_eq!(cache.position_of(2), Some(1));
    assert_eq!(offsets(&cache), vec![0.0, 10.0]);
    assert!(!cache.contains(1));
    assert_eq!(cache.remove_data(1), Err(LayoutError::UnknownId(1)));

    // Removing the first record keeps the sequence anchored at the old start.
    cache.remove_data(0).unwrap();
    assert_eq!(offsets(&cache), vec![0.0]);
    assert_dense(&cache);
}

#[test]
fn unknown_ids_are_reported() {
    let mut cache = cache_with_sizes(&[10.0]);
    assert_eq!(cache.data_offset(3), Err(LayoutError::UnknownId(3)));
    assert_eq!(cache.end_data_offset(3), Err(LayoutError::UnknownId(3)));
    assert_eq!(
        cache.set_data_offset_after(3, 0.0),
        Err(LayoutError::UnknownId(3))
    );
    assert!(!cache.contains(3));
}

#[test]
fn uniform_padding_splits_between_neighbours_and_respects_outer_padding() {
    let mut cache = GeometryCache::new();
    cache.uniform_padding(4.0).unwrap();
    for i in 0..3 {
        cache.add_data(i, i, 10.0, 0.0, 0.0).unwrap();
    }
    // slot0 [0, 12), slot1 [12, 26), slot2 [26, 38)
    assert_eq!(offsets(&cache), vec![0.0, 14.0, 28.0]);
    assert_eq!(cache.start_data_offset(0), Ok(0.0));
    assert_eq!(cache.start_data_offset(1), Ok(12.0));
    assert_eq!(cache.end_data_offset(2), Ok(38.0));
    assert_eq!(cache.total_size(), 38.0);
    assert_eq!(cache.size_with_padding(1), Ok(14.0));

    cache.set_outer_padding(true);
    assert_eq!(offsets(&cache), vec![4.0, 18.0, 32.0]);
    assert_eq!(cache.total_size(), 46.0);
    assert_eq!(cache.size_with_padding(0), Ok(16.0));

    assert_eq!(
        cache.uniform_padding(-1.0),
        Err(LayoutError::InvalidPadding(-1.0))
    );
}

#[test]
fn set_data_offset_after_and_before_touch_only_one_record() {
    let mut cache = cache_with_sizes(&[10.0; 5]);
    assert_eq!(cache.set_data_offset_after(2, 100.0), Ok(110.0));
    assert_eq!(offsets(&cache), vec![0.0, 10.0, 100.0, 30.0, 40.0]);

    assert_eq!(cache.set_data_offset_before(3, 50.0), Ok(40.0));
    assert_eq!(offsets(&cache), vec![0.0, 10.0, 100.0, 40.0, 40.0]);
}

#[test]
fn propagate_from_places_records_around_the_anchor() {
    let mut cache = cache_with_sizes(&[10.0; 5]);
    cache.set_data_offset_after(2, 100.0).unwrap();
    cache.propagate_from(2).unwrap();
    assert_eq!(offsets(&cache), vec![80.0, 90.0, 100.0, 110.0, 120.0]);
}

#[test]
fn shift_by_translates_everything_including_later_inserts() {
    let mut cache = cache_with_sizes(&[10.0, 20.0]);
    cache.shift_by(-5.0);
    assert_eq!(offsets(&cache), vec![-5.0, 5.0]);

    let mut empty = GeometryCache::new();
    empty.shift_by(7.0);
    assert_eq!(empty.add_data(0, 0, 3.0, 0.0, 0.0), Ok(7.0));
}

#[test]
fn uniform_size_uses_largest_measured_size() {
    let mut cache = cache_with_sizes(&[10.0, 30.0, 20.0]);
    assert_eq!(cache.uniform_size(), Some(30.0));
    assert_eq!(offsets(&cache), vec![0.0, 30.0, 60.0]);
    assert_eq!(cache.add_data(3, 3, 5.0, 0.0, 0.0), Ok(90.0));
    assert_eq!(cache.data_size(3), Ok(30.0));

    cache.clear_uniform_size();
    cache.add_data(4, 4, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(cache.data_size(4), Ok(5.0));

    let mut unmeasured = GeometryCache::new();
    unmeasured.add_data(0, 0, f32::NAN, 0.0, 0.0).unwrap();
    assert_eq!(unmeasured.uniform_size(), None);
}

#[test]
fn search_pos_maps_sparse_data_indexes() {
    let mut cache = GeometryCache::new();
    for (pos, id) in [2usize, 4, 6].into_iter().enumerate() {
        cache.add_data(id, pos, 1.0, 0.0, 0.0).unwrap();
    }
    assert_eq!(cache.search_pos(4), Ok(1));
    assert_eq!(cache.search_pos(5), Err(2));
    assert_eq!(cache.search_pos(0), Err(0));
    assert_eq!(cache.search_pos(7), Err(3));
}

#[test]
fn position_at_offset_finds_the_containing_slot() {
    let cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    assert_eq!(cache.position_at_offset(-5.0), Some(0));
    assert_eq!(cache.position_at_offset(9.5), Some(0));
    assert_eq!(cache.position_at_offset(10.0), Some(1));
    assert_eq!(cache.position_at_offset(15.0), Some(1));
    assert_eq!(cache.position_at_offset(100.0), Some(2));
    assert_eq!(GeometryCache::new().position_at_offset(0.0), None);
}

#[test]
fn invalidate_offset_keeps_sizes() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    cache.invalidate(Invalidation::Offset);
    assert!(cache.iter().all(|r| !r.is_placed()));
    assert!(cache.is_measured());
    assert_eq!(cache.total_size(), 35.0);
}

#[test]
fn invalidate_size_forces_remeasurement() {
    let mut cache = cache_with_sizes(&[10.0, 20.0, 5.0]);
    cache.invalidate(Invalidation::Size);
    assert!(!cache.is_measured());
    assert!(cache.total_size().is_nan());
    assert_eq!(cache.count(), 3);

    cache.add_data(0, 0, 10.0, 0.0, 0.0).unwrap();
    cache.add_data(1, 1, 20.0, 0.0, 0.0).unwrap();
    cache.add_data(2, 2, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(offsets(&cache), vec![0.0, 10.0, 30.0]);
    assert_eq!(cache.total_size(), 35.0);
}

#[test]
fn invalidate_padding_reapplies_shared_padding_or_marks_it_stale() {
    let mut cache = cache_with_sizes(&[10.0, 10.0]);
    cache.invalidate(Invalidation::Padding);
    assert!(!cache.is_measured());

    let mut shared = GeometryCache::new();
    shared.uniform_padding(2.0).unwrap();
    shared.add_data(0, 0, 10.0, 0.0, 0.0).unwrap();
    shared.add_data(1, 1, 10.0, 0.0, 0.0).unwrap();
    shared.invalidate(Invalidation::Padding);
    assert!(shared.is_measured());
    assert_eq!(offsets(&shared), vec![0.0, 12.0]);

    shared.invalidate_all();
    assert_eq!(shared.count(), 2);
    assert!(!shared.is_measured());
    assert_dense(&shared);
}

#[test]
fn randomized_add_remove_keeps_positions_dense_and_offsets_contiguous() {
    let mut rng = Lcg::new(0x5eed);
    let mut cache = GeometryCache::new();
    let mut model: Vec<(usize, f32)> = Vec::new();
    let mut next_id = 0usize;

    for _ in 0..500 {
        if model.is_empty() || rng.gen_bool() {
            let pos = rng.gen_range_usize(0, model.len() + 1);
            let size = rng.gen_range_usize(1, 50) as f32;
            cache.add_data(next_id, pos, size, 0.0, 0.0).unwrap();
            model.insert(pos, (next_id, size));
            next_id += 1;
        } else {
            let pos = rng.gen_range_usize(0, model.len());
            let (id, _) = model.remove(pos);
            cache.remove_data(id).unwrap();
        }

        assert_eq!(cache.count(), model.len());
        assert_dense(&cache);
        let mut expected = 0.0f32;
        for (pos, &(id, size)) in model.iter().enumerate() {
            let r = cache.record_at(pos).unwrap();
            assert_eq!(r.id, id);
            assert_eq!(r.offset, expected);
            expected += size;
        }
        assert_eq!(cache.total_size(), expected);
    }
}

#[test]
fn axis_duality_sums_on_the_active_axis_and_maxes_elsewhere() {
    let children = [
        Vector3::new(10.0, 5.0, 1.0),
        Vector3::new(20.0, 7.0, 2.0),
        Vector3::new(30.0, 3.0, 3.0),
    ];
    let row = LinearLayout::new(LayoutOptions::new(Orientation::Horizontal)).unwrap();
    let column = LinearLayout::new(LayoutOptions::new(Orientation::Vertical)).unwrap();
    let stack = LinearLayout::new(LayoutOptions::new(Orientation::Stack)).unwrap();

    assert_eq!(row.calculate_width(&children), 60.0);
    assert_eq!(column.calculate_width(&children), 30.0);
    assert_eq!(row.calculate_height(&children), 7.0);
    assert_eq!(column.calculate_height(&children), 15.0);
    assert_eq!(stack.calculate_depth(&children), 6.0);
    assert_eq!(stack.calculate_width(&children), 30.0);

    let padded = LinearLayout::new(
        LayoutOptions::new(Orientation::Horizontal)
            .with_divider_padding(4.0)
            .with_outer_padding(true),
    )
    .unwrap();
    assert_eq!(padded.calculate_width(&children), 76.0);
    assert_eq!(padded.calculate_height(&children), 7.0);
}

#[test]
fn calculate_size_defers_until_every_child_is_measured() {
    let row = LinearLayout::new(LayoutOptions::new(Orientation::Horizontal)).unwrap();
    let children = [Vector3::new(10.0, 1.0, 1.0), Vector3::new(f32::NAN, 1.0, 1.0)];
    assert!(row.calculate_width(&children).is_nan());
    assert_eq!(row.calculate_height(&children), 1.0);
    assert_eq!(row.calculate_width(&[]), 0.0);
}

#[test]
fn layout_child_adds_the_layout_offset_on_the_active_axis() {
    let mut layout = column_layout(&[10.0, 20.0], 100.0);
    layout.set_offset(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(layout.layout_child(1), Ok(Vector3::new(1.0, 12.0, 3.0)));
    assert_eq!(layout.layout_child(5), Err(LayoutError::UnknownId(5)));
}

#[test]
fn gravity_centres_a_short_block() {
    let mut layout = column_layout(&[10.0, 20.0], 100.0);
    layout.set_gravity(Gravity::Center);
    assert_eq!(layout.data_offset(0), Ok(35.0));
    assert_eq!(layout.data_offset(1), Ok(45.0));

    layout.set_gravity(Gravity::End);
    assert_eq!(layout.data_offset(0), Ok(70.0));
}

#[test]
fn in_viewport_tests_intersection_with_the_window() {
    let mut layout = column_layout(&[10.0, 10.0, 10.0], 25.0);
    assert!(layout.in_viewport(0));
    assert!(layout.in_viewport(2));

    layout.set_offset(Vector3::new(0.0, -25.0, 0.0));
    assert!(!layout.in_viewport(0));
    assert!(!layout.in_viewport(1));
    assert!(layout.in_viewport(2));
    assert!(!layout.in_viewport(9));

    layout.set_clipping(false);
    assert!(layout.in_viewport(0));
    assert!(!layout.in_viewport(9));
}

#[test]
fn visible_range_and_center_child_follow_the_offset() {
    let mut layout = column_layout(&[10.0; 10], 35.0);
    layout.set_offset(Vector3::new(0.0, -20.0, 0.0));

    let range = layout.visible_range();
    assert_eq!(
        range,
        VisibleRange {
            start_index: 2,
            end_index: 6
        }
    );
    assert_eq!(range.len(), 4);
    assert_eq!(layout.center_child(), 3);

    let mut seen = Vec::new();
    layout
        .for_each_visible_child(|i, pos| seen.push((i, pos.y)))
        .unwrap();
    assert_eq!(seen, vec![(2, 0.0), (3, 10.0), (4, 20.0), (5, 30.0)]);
}

#[test]
fn direction_and_distance_are_measured_from_the_viewport_centre() {
    let mut layout = column_layout(&[10.0; 10], 35.0);
    layout.set_offset(Vector3::new(0.0, -20.0, 0.0));

    assert_eq!(layout.distance_to_child(3, Axis::Y), -2.5);
    assert_eq!(layout.direction_to_child(3, Axis::Y), Direction::Backward);
    assert_eq!(layout.distance_to_child(5, Axis::Y), 17.5);
    assert_eq!(layout.direction_to_child(5, Axis::Y), Direction::Forward);

    assert_eq!(layout.distance_to_child(5, Axis::X), 0.0);
    assert_eq!(layout.direction_to_child(5, Axis::X), Direction::None);
    assert!(layout.distance_to_child(42, Axis::Y).is_nan());
    assert_eq!(layout.direction_to_child(42, Axis::Y), Direction::None);

    // Child 2 now fills the whole viewport.
    layout.set_viewport_size(Vector3::new(50.0, 10.0, 0.0));
    assert_eq!(layout.direction_to_child(2, Axis::Y), Direction::None);
}

#[test]
fn absolute_layout_has_no_directional_semantics() {
    let mut layout = AbsoluteLayout::new();
    layout.set_offset(Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(layout.layout_child(17), Ok(Vector3::new(4.0, 5.0, 6.0)));
    assert!(layout.in_viewport(1000));
    assert_eq!(layout.center_child(), 0);
    assert_eq!(layout.direction_to_child(3, Axis::X), Direction::None);
    assert_eq!(layout.distance_to_child(3, Axis::X), 0.0);

    let children = [Vector3::new(10.0, 5.0, 1.0), Vector3::new(20.0, 7.0, 2.0)];
    assert_eq!(layout.calculate_width(&children), 20.0);
    assert_eq!(layout.calculate_height(&children), 7.0);

    let mut items = Items::column(&[1.0, 2.0]);
    assert_eq!(
        layout.pre_measure_next(&mut items, &[0], Axis::Y, Direction::Forward),
        Ok(None)
    );
}

#[test]
fn pre_measure_next_looks_one_item_ahead() {
    let mut items = Items::column(&[10.0; 5]);
    let mut layout = LinearLayout::new(LayoutOptions::new(Orientation::Vertical)).unwrap();
    layout.measure_child(0, items.measure(0)).unwrap();
    layout.measure_child(1, items.measure(1)).unwrap();

    assert_eq!(
        layout.pre_measure_next(&mut items, &[0, 1], Axis::Y, Direction::Forward),
        Ok(Some(2))
    );
    assert_eq!(layout.cache().count(), 3);
    assert_eq!(layout.cache().data_offset(2), Ok(20.0));

    assert_eq!(
        layout.pre_measure_next(&mut items, &[4], Axis::Y, Direction::Forward),
        Ok(None)
    );
    assert_eq!(
        layout.pre_measure_next(&mut items, &[0], Axis::Y, Direction::Backward),
        Ok(None)
    );
    assert_eq!(
        layout.pre_measure_next(&mut items, &[0, 1], Axis::X, Direction::Forward),
        Ok(None)
    );

    items.sizes[3] = Vector3::NAN;
    assert_eq!(
        layout.pre_measure_next(&mut items, &[0, 1, 2], Axis::Y, Direction::Forward),
        Ok(None)
    );
    assert!(!layout.cache().contains(3));
}

#[test]
fn pre_measure_backward_keeps_existing_items_in_place() {
    let mut items = Items::column(&[10.0; 5]);
    let mut layout = LinearLayout::new(LayoutOptions::new(Orientation::Vertical)).unwrap();
    layout.measure_child(2, items.measure(2)).unwrap();
    layout.measure_child(3, items.measure(3)).unwrap();
    assert_eq!(layout.cache().data_offset(2), Ok(0.0));

    assert_eq!(
        layout.pre_measure_next(&mut items, &[2, 3], Axis::Y, Direction::Backward),
        Ok(Some(1))
    );
    assert_eq!(layout.cache().position_of(1), Some(0));
    assert_eq!(layout.cache().data_offset(1), Ok(-10.0));
    assert_eq!(layout.cache().data_offset(2), Ok(0.0));
    assert_eq!(layout.cache().data_offset(3), Ok(10.0));
}

#[test]
fn measure_until_full_stops_once_the_viewport_is_covered() {
    let mut items = Items::column(&[10.0; 8]);
    let mut layout = LinearLayout::new(
        LayoutOptions::new(Orientation::Vertical).with_viewport(Vector3::new(0.0, 35.0, 0.0)),
    )
    .unwrap();
    assert_eq!(layout.measure_until_full(&mut items, 0), Ok(4));
    assert_eq!(layout.cache().count(), 4);

    let mut short = Items::column(&[10.0, 10.0]);
    let mut layout = LinearLayout::new(
        LayoutOptions::new(Orientation::Vertical).with_viewport(Vector3::new(0.0, 35.0, 0.0)),
    )
    .unwrap();
    assert_eq!(layout.measure_until_full(&mut short, 0), Ok(2));
    assert_eq!(layout.measure_until_full(&mut short, 5), Ok(0));
}

#[test]
fn layout_children_restores_stale_offsets() {
    let mut layout = column_layout(&[10.0, 20.0, 5.0], 100.0);
    layout.invalidate(Invalidation::Offset);
    assert!(!layout.cache().is_placed());

    layout.layout_children().unwrap();
    let all = layout.layout_all().unwrap();
    let ys: Vec<f32> = all.iter().map(|(_, p)| p.y).collect();
    assert_eq!(ys, vec![0.0, 10.0, 30.0]);
}

#[test]
fn orientation_change_invalidates_sizes() {
    let mut layout = column_layout(&[10.0, 20.0], 100.0);
    assert!(layout.cache().is_measured());
    layout.set_orientation(Orientation::Horizontal);
    assert_eq!(layout.axis(), Axis::X);
    assert!(!layout.cache().is_measured());
}

#[test]
fn nan_viewport_extents_are_treated_as_zero() {
    let mut layout = column_layout(&[10.0], 100.0);
    layout.set_viewport_size(Vector3::new(f32::NAN, 30.0, f32::NAN));
    assert_eq!(layout.viewport_size(), Vector3::new(0.0, 30.0, 0.0));
}

#[test]
fn raw_axis_and_orientation_values_are_validated() {
    assert_eq!(Axis::try_from(2), Ok(Axis::Z));
    assert_eq!(Axis::try_from(5), Err(LayoutError::InvalidAxis(5)));
    assert_eq!(Orientation::try_from(0), Ok(Orientation::Horizontal));
    assert_eq!(
        Orientation::try_from(3),
        Err(LayoutError::InvalidOrientation(3))
    );
    assert_eq!(Orientation::from_raw_or_default(7), Orientation::Vertical);
    assert_eq!(Orientation::Stack.axis(), Axis::Z);
}

#[test]
fn negative_divider_padding_is_rejected_at_construction() {
    let err = LinearLayout::new(LayoutOptions::default().with_divider_padding(-2.0)).unwrap_err();
    assert_eq!(err, LayoutError::InvalidPadding(-2.0));
}
