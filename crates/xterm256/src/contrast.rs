/// The distance by which each channel of a foreground color moves away from
/// the background color.
pub(crate) const OFFSET: i16 = 96;

/// Compute a foreground color that stands out against the given background.
///
/// This is a cheap heuristic, not a perceptual contrast metric. All three
/// channels shift by [`OFFSET`] towards white. If the background's brightest
/// channel is already within [`OFFSET`] of the maximum, i.e., exceeds 159,
/// the channels shift towards black instead. Either way, the result saturates
/// at 0 and 255, so channels may end up closer to the background than the
/// offset suggests.
pub(crate) fn adaptive_foreground(background: &[u8; 3]) -> [u8; 3] {
    let [r, g, b] = *background;
    let brightest = i16::from(r.max(g).max(b));

    let offset = if 255 - OFFSET < brightest {
        -OFFSET
    } else {
        OFFSET
    };

    background.map(|c| (i16::from(c) + offset).clamp(0, 255) as u8)
}
