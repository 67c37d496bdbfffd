/// Fixed categorical palette for per-fuel chart colors.
///
/// Twenty entries, paired strong/soft hues. The table ships with fewer fuels
/// than palette entries, so distinct fuels get distinct colors; past the
/// palette length the assignment wraps.
const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Returns the palette color for the fuel at the given distinct-fuel index.
pub(super) fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
