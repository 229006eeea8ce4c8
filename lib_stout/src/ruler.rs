/// Whether (x, y) lies on the centre column(s) or row(s) of a `cols` x `rows` grid.
///
/// An even dimension has two centre lines, an odd one has a single line.
pub fn is_ruler_cell(x: u32, y: u32, cols: u32, rows: u32) -> bool {
    is_centre_line(x, cols) || is_centre_line(y, rows)
}

fn is_centre_line(i: u32, len: u32) -> bool {
    i == len / 2 || (len % 2 == 0 && len > 0 && i == len / 2 - 1)
}
