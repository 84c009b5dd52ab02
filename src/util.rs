/// Lazily pivot equal-length rows into columns
///
/// Used to turn one regret trace per run into one row per round.
///
/// **Panics** if `rows` is empty or the rows differ in length
pub fn transpose_iter<T>(rows: Vec<Vec<T>>) -> impl Iterator<Item = Vec<T>> {
    assert!(!rows.is_empty(), "Nothing to transpose.");
    let len = rows[0].len();
    assert!(
        rows.iter().all(|row| row.len() == len),
        "All rows must have the same length."
    );
    let mut iters = rows.into_iter().map(|row| row.into_iter()).collect::<Vec<_>>();
    (0..len).map(move |_| {
        iters
            .iter_mut()
            .map(|it| it.next().expect("rows have equal length"))
            .collect::<Vec<T>>()
    })
}

pub fn transpose<T>(rows: Vec<Vec<T>>) -> Vec<Vec<T>> {
    transpose_iter(rows).collect()
}
