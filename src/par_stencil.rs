use crate::stencil::*;
use rayon::prelude::*;

/// Apply `stencil` to every index of `range`, reading `input` and
/// writing `output`. Values outside `range` are left untouched.
/// `chunk_size` breaks the work into tasks for multi-threading.
pub fn apply<S: StencilRule + ?Sized>(
    stencil: &S,
    input: &[f64],
    output: &mut [f64],
    range: std::ops::Range<usize>,
    chunk_size: usize,
) {
    profiling::scope!("par_stencil::apply");
    let chunk_size = chunk_size.max(1);
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(range.start >= stencil.footprint().left);
    debug_assert!(range.end + stencil.footprint().right <= input.len());
    let start = range.start;
    output[range]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let offset = start + chunk_index * chunk_size;
            for (j, value_mut) in chunk.iter_mut().enumerate() {
                *value_mut = stencil.apply(input, offset + j);
            }
        });
}

/// Index of the first non-finite value, if any.
pub fn find_non_finite(values: &[f64], chunk_size: usize) -> Option<usize> {
    let chunk_size = chunk_size.max(1);
    values
        .par_chunks(chunk_size)
        .enumerate()
        .find_map_first(|(chunk_index, chunk)| {
            chunk
                .iter()
                .position(|v| !v.is_finite())
                .map(|p| chunk_index * chunk_size + p)
        })
}
