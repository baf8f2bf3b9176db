use sk_core::BinaryMask;
use sk_core::neighborhood::NEIGHBOR_OFFSETS;

/// Number of 8-connected foreground components, border ring included.
pub fn count_components(mask: &BinaryMask) -> usize {
    let (w, h) = mask.dimensions();
    let data = mask.data();
    let n = data.len();

    let mut seen = vec![false; n];
    let mut stack = Vec::new();
    let mut components = 0;

    for i in 0..n {
        if !mask.is_foreground(i % w, i / w) || seen[i] {
            continue;
        }

        components += 1;
        seen[i] = true;
        stack.push(i);

        while let Some(p) = stack.pop() {
            let (x, y) = (p % w, p / w);
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if nx >= w || ny >= h || !mask.is_foreground(nx, ny) {
                    continue;
                }
                let q = ny * w + nx;
                if !seen[q] {
                    seen[q] = true;
                    stack.push(q);
                }
            }
        }
    }

    components
}
