// Copyright (c) 2023 Bastiaan Marinus van de Weerd


struct Schematic {
	bytes: Vec<u8>,
	width: usize,
}

#[cfg_attr(test, derive(Debug))]
struct Number {
	value: u64,
	x: std::ops::Range<usize>,
	y: usize,
}

impl Schematic {
	fn height(&self) -> usize {
		self.bytes.len() / self.width
	}

	fn byte_xy(&self, x: usize, y: usize) -> u8 {
		self.bytes[y * self.width + x]
	}

	fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
		(0..self.height()).flat_map(move |y| {
			let mut x = 0;
			std::iter::from_fn(move || {
				while x < self.width && !self.byte_xy(x, y).is_ascii_digit() { x += 1 }
				if x >= self.width { return None }
				let start = x;
				let mut value = 0;
				while x < self.width && self.byte_xy(x, y).is_ascii_digit() {
					value = value * 10 + (self.byte_xy(x, y) - b'0') as u64;
					x += 1;
				}
				Some(Number { value, x: start..x, y })
			})
		})
	}

	fn has_adjacent_symbol(&self, number: &Number) -> bool {
		use itertools::iproduct;
		let xs = number.x.start.saturating_sub(1)..(number.x.end + 1).min(self.width);
		let ys = number.y.saturating_sub(1)..(number.y + 2).min(self.height());
		iproduct!(ys, xs).any(|(y, x)| {
			let b = self.byte_xy(x, y);
			b != b'.' && !b.is_ascii_digit()
		})
	}
}

impl Number {
	fn is_adjacent_xy(&self, x: usize, y: usize) -> bool {
		self.y.abs_diff(y) <= 1 && self.x.start <= x + 1 && x <= self.x.end
	}
}


fn input_schematic_from_str(s: &str) -> Schematic {
	s.parse().unwrap()
}

fn input_schematic() -> Schematic {
	input_schematic_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_schematic: Schematic) -> u64 {
	input_schematic.numbers()
		.filter(|number| input_schematic.has_adjacent_symbol(number))
		.map(|number| number.value)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_schematic())
}


fn part2_impl(input_schematic: Schematic) -> u64 {
	use itertools::Itertools as _;
	let numbers = input_schematic.numbers().collect::<Vec<_>>();
	(0..input_schematic.bytes.len())
		.filter(|&pos| input_schematic.bytes[pos] == b'*')
		.filter_map(|pos| {
			let (x, y) = (pos % input_schematic.width, pos / input_schematic.width);
			numbers.iter()
				.filter(|number| number.is_adjacent_xy(x, y))
				.map(|number| number.value)
				.collect_tuple()
				.map(|(left, right)| left * right)
		})
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_schematic())
}


mod parsing {
	use std::str::FromStr;
	use super::Schematic;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SchematicError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Schematic {
		type Err = SchematicError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(SchematicError::Empty) }

			let mut bytes = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					match b {
						_ if Some(c) == width => return Err(SchematicError::LineLen {
							line: l + 1, len: width, found: c + 1 }),
						found if found.is_ascii_digit() || found.is_ascii_punctuation() =>
							bytes.push(found),
						found => return Err(SchematicError::InvalidByte {
							line: l + 1, column: c + 1, found }),
					}
				}

				match width {
					None => width = Some(line.len()),
					Some(width) if line.len() < width => return Err(SchematicError::LineLen {
						line: l + 1, len: Some(width), found: line.len() }),
					_ => (),
				}
			}

			match width {
				Some(width) if width > 0 => Ok(Schematic { bytes, width }),
				_ => Err(SchematicError::Empty),
			}
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };
	assert_eq!(part1_impl(input_schematic_from_str(INPUT)), 4361);
	assert_eq!(part1(), 152586);
	assert_eq!(part2_impl(input_schematic_from_str(INPUT)), 467835);
	assert_eq!(part2(), 1559009);
}
