/// Counts through every digit vector of a fixed length in a fixed radix.
///
/// Vectors come out in lexicographic order, the rightmost digit turning
/// fastest, so `Odometer::new(2, 3)` yields `[0, 0]`, `[0, 1]`, `[0, 2]`,
/// `[1, 0]` and so on up to `[2, 2]`.
#[derive(Debug, Clone)]
pub struct Odometer {
	digits: Vec<usize>,
	radix: usize,
	exhausted: bool,
}

impl Odometer {
	pub fn new(digit_count: usize, radix: usize) -> Self {
		Self {
			digits: vec![0; digit_count],
			radix,
			exhausted: radix == 0 && digit_count > 0,
		}
	}

	fn advance(&mut self) -> bool {
		for digit in self.digits.iter_mut().rev() {
			*digit += 1;

			if *digit < self.radix {
				return true;
			}

			*digit = 0;
		}

		false
	}
}

impl Iterator for Odometer {
	type Item = Vec<usize>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}

		let reading = self.digits.clone();
		self.exhausted = !self.advance();

		Some(reading)
	}
}
