#[cfg(test)]
pub fn init_test_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds the array every dataset is filled with: `len` 64-bit integers counting up from 0, i.e. `0, 1, 2, ..., len - 1`
pub fn source_array(len: usize) -> Vec<i64> {
	(0..len as i64).collect()
}

#[cfg(test)]
mod test {
	use super::source_array;

	#[test]
	fn test_source_array() {
		assert_eq!(source_array(0), Vec::<i64>::new());
		assert_eq!(source_array(5), vec![0, 1, 2, 3, 4]);

		let arr = source_array(1 << 16);
		assert_eq!(arr.len(), 1 << 16);
		assert!(arr.iter().enumerate().all(|(i, &v)| v == i as i64));
	}
}
