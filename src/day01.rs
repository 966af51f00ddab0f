// Copyright (c) 2023 Bastiaan Marinus van de Weerd


const DIGIT_WORDS: [&str; 9] =
	["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];


fn input_lines_from_str(s: &str) -> impl Iterator<Item = &str> {
	parsing::calibration_lines_from_str(s).map(|r| r.unwrap())
}

fn input_lines() -> impl Iterator<Item = &'static str> {
	input_lines_from_str(include_str!("day01.txt"))
}


fn calibration_value(mut digits: impl Iterator<Item = u64>) -> u64 {
	let first = digits.next().unwrap();
	first * 10 + digits.last().unwrap_or(first)
}


fn part1_impl<'a>(input_lines: impl Iterator<Item = &'a str>) -> u64 {
	input_lines
		.map(|line| calibration_value(line.bytes()
			.filter_map(|b| b.is_ascii_digit().then(|| (b - b'0') as u64))))
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_lines())
}


fn part2_impl<'a>(input_lines: impl Iterator<Item = &'a str>) -> u64 {
	input_lines
		.map(|line| calibration_value(line.char_indices()
			.filter_map(move |(c, chr)| chr.to_digit(10).map(u64::from)
				.or_else(|| DIGIT_WORDS.iter()
					.position(|word| line[c..].starts_with(word))
					.map(|d| d as u64 + 1)))))
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_lines())
}


mod parsing {

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CalibrationError {
		Empty,
		BlankLine { line: usize },
	}

	pub(super) fn calibration_lines_from_str(s: &str)
	-> impl Iterator<Item = Result<&str, CalibrationError>> {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(CalibrationError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| if line.is_empty() {
				Err(CalibrationError::BlankLine { line: l + 1 })
			} else {
				Ok(line)
			}))
	}
}


#[test]
fn tests() {
	const INPUT_PART1: &str = indoc::indoc! { "
		1abc2
		pqr3stu8vwx
		a1b2c3d4e5f
		treb7uchet
	" };
	const INPUT_PART2: &str = indoc::indoc! { "
		two1nine
		eightwothree
		abcone2threexyz
		xtwone3four
		4nineeightseven2
		zoneight234
		7pqrstsixteen
	" };
	assert_eq!(part1_impl(input_lines_from_str(INPUT_PART1)), 142);
	assert_eq!(part1(), 7642);
	assert_eq!(part2_impl(input_lines_from_str(INPUT_PART2)), 281);
	assert_eq!(part2(), 7803);
}
