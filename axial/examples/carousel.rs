// Example: a centred horizontal carousel that grows in both directions.
use axial::{
    Axis, Direction, Gravity, ItemSource, Layout, LayoutOptions, LinearLayout, Orientation,
    Vector3,
};

struct Cards {
    count: usize,
}

impl ItemSource for Cards {
    fn item_count(&self) -> usize {
        self.count
    }

    fn measure(&mut self, _data_index: usize) -> Vector3 {
        Vector3::new(120.0, 80.0, 0.0)
    }
}

fn main() -> Result<(), axial::LayoutError> {
    let mut layout = LinearLayout::new(
        LayoutOptions::new(Orientation::Horizontal)
            .with_divider_padding(10.0)
            .with_gravity(Gravity::Center)
            .with_viewport(Vector3::new(400.0, 100.0, 0.0)),
    )?;
    let mut cards = Cards { count: 12 };

    // Start in the middle of the data set and look one card ahead on each side.
    layout.measure_child(6, cards.measure(6))?;
    let mut measured = vec![6];
    for direction in [Direction::Forward, Direction::Backward] {
        if let Some(next) = layout.pre_measure_next(&mut cards, &measured, Axis::X, direction)? {
            measured.push(next);
        }
    }

    for (i, pos) in layout.layout_all()? {
        println!(
            "card {i}: x={} distance={} direction={:?}",
            pos.x,
            layout.distance_to_child(i, Axis::X),
            layout.direction_to_child(i, Axis::X)
        );
    }
    println!("focused card={}", layout.center_child());
    Ok(())
}
