/// Width of [`DEFAULT_LAYOUT`].
pub const DEFAULT_WIDTH: usize = 12;
/// Height of [`DEFAULT_LAYOUT`].
pub const DEFAULT_HEIGHT: usize = 15;

/// The gallery as shipped, one string of 12 × 15 tile codes.
pub const DEFAULT_LAYOUT: &str = concat!(
    "            ",
    "##...       ",
    "w#####      ",
    "w#mmmm###E# ",
    "w#mmmm #### ",
    "##mmm# F### ",
    " #     ###D ",
    " ##A####B## ",
    " C####    # ",
    " #####S####.",
    "   #   ####.",
    "  #########.",
    "  ######### ",
    "..........# ",
    "            ",
);
