/// Shift a series by `offset` positions.
///
/// A positive offset moves values later (`out[i] = data[i - offset]`) and
/// leaves the first `offset` slots empty; a negative offset moves them earlier
/// and empties the tail. Zero returns a plain copy.
pub fn apply_offset<T: Copy>(data: &[Option<T>], offset: i64) -> Vec<Option<T>> {
    let len = data.len();
    let shift = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);

    if offset == 0 {
        return data.to_vec();
    }
    if shift >= len {
        return vec![None; len];
    }

    let mut result = vec![None; len];
    if offset > 0 {
        result[shift..].copy_from_slice(&data[..len - shift]);
    } else {
        result[..len - shift].copy_from_slice(&data[shift..]);
    }
    result
}
