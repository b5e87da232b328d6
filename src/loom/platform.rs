/// Runs `f(index, row)` for every `cols`-wide row of `data` and returns once all rows are done.
///
/// Rows are disjoint `&mut` chunks, so tasks never share a cell. A panic in any row
/// propagates to the caller.
#[cfg(feature = "rayon")]
pub fn for_each_row<T, F>(data: &mut [T], cols: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    use rayon::prelude::*;

    if cols == 0 {
        return;
    }
    data.par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(index, row)| f(index, row));
}

/// Runs `f(index, row)` for every `cols`-wide row of `data` and returns once all rows are done.
///
/// Spawns one scoped thread per row. A panic in any row propagates to the caller.
#[cfg(not(feature = "rayon"))]
pub fn for_each_row<T, F>(data: &mut [T], cols: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if cols == 0 {
        return;
    }
    let f = &f;
    std::thread::scope(|scope| {
        for (index, row) in data.chunks_exact_mut(cols).enumerate() {
            scope.spawn(move || f(index, row));
        }
    });
}
