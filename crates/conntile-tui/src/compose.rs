use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// An empty buffer the size of `area`, anchored at the origin, for rendering
/// a panel off-screen.
pub fn offscreen(area: Rect) -> Buffer {
    Buffer::empty(Rect::new(0, 0, area.width, area.height))
}

/// Copies `src` into `area` of `dst`, shifted `dx` columns to the right.
/// Columns that fall outside `area` are clipped.
pub fn blit_shifted(src: &Buffer, dst: &mut Buffer, area: Rect, dx: i32) {
    let area = area.intersection(dst.area);
    let width = i32::from(src.area.width.min(area.width));
    let height = src.area.height.min(area.height);

    for y in 0..height {
        for x in 0..width {
            let target = x + dx;
            if target < 0 || target >= width {
                continue;
            }
            let cell = src[(x as u16, y)].clone();
            dst[(area.x + target as u16, area.y + y)] = cell;
        }
    }
}
