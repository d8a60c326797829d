/// Visits an image two rows at a time, matching the vertical chroma sub sampling of I420
pub(crate) trait RowPairVisitor {
    /// Visit rows `y` and `y + 1`
    fn visit(&mut self, y: usize);
}

/// Call `visitor` for every pair of rows in an image of `height` rows
///
/// The loop is compiled once more for every supported target feature set, the best one is picked at runtime.
/// Everything the visitor does must be `#[inline(always)]` to benefit from it.
#[inline(never)]
pub(crate) fn visit<R>(height: usize, visitor: R)
where
    R: RowPairVisitor,
{
    debug_assert_eq!(height % 2, 0);

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("avx2") {
        #[target_feature(enable = "avx2")]
        unsafe fn call<R>(height: usize, visitor: R)
        where
            R: RowPairVisitor,
        {
            visit_impl(height, visitor);
        }

        // Safety: Did a feature check
        unsafe { call::<R>(height, visitor) };
        return;
    }

    #[cfg(target_arch = "aarch64")]
    if std::arch::is_aarch64_feature_detected!("neon") {
        #[target_feature(enable = "neon")]
        unsafe fn call<R>(height: usize, visitor: R)
        where
            R: RowPairVisitor,
        {
            visit_impl(height, visitor);
        }

        // Safety: Did a feature check
        unsafe { call::<R>(height, visitor) };
        return;
    }

    // Fallback to the baseline target features
    visit_impl(height, visitor);
}

#[inline(always)]
fn visit_impl<R: RowPairVisitor>(height: usize, mut visitor: R) {
    for y in (0..height).step_by(2) {
        visitor.visit(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect<'a>(&'a mut Vec<usize>);

    impl RowPairVisitor for Collect<'_> {
        fn visit(&mut self, y: usize) {
            self.0.push(y);
        }
    }

    #[test]
    fn visits_every_row_pair_once() {
        let mut rows = Vec::new();

        visit(8, Collect(&mut rows));

        assert_eq!(rows, [0, 2, 4, 6]);
    }
}
