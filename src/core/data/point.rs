/// A sample position on the pixel grid, `y` counting half-block sub-pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
