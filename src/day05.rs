// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Rule {
	source_start: i64,
	destination_start: i64,
	length: i64,
}

/// One named remapping table, e.g. `seed-to-soil`. Immutable once parsed.
#[cfg_attr(test, derive(Debug))]
struct Stage {
	#[allow(dead_code)]
	name: String,
	rules: Vec<Rule>,
}

#[cfg_attr(test, derive(Debug))]
struct Almanac {
	seeds: Vec<i64>,
	stages: Vec<Stage>,
}

impl Rule {
	fn lookup(&self, value: i64) -> Option<i64> {
		(self.source_start..self.source_start + self.length).contains(&value)
			.then(|| self.destination_start + value - self.source_start)
	}
}

impl Stage {
	/// Rules are not checked for overlap; the last matching rule wins,
	/// and a value no rule covers maps to itself.
	fn lookup(&self, value: i64) -> i64 {
		self.rules.iter()
			.filter_map(|rule| rule.lookup(value))
			.last()
			.unwrap_or(value)
	}
}

impl Almanac {
	fn evaluate(&self, seed: i64) -> i64 {
		self.stages.iter().fold(seed, |value, stage| stage.lookup(value))
	}
}


#[derive(Debug)]
struct EmptySeedsError;

fn min_location(almanac: &Almanac) -> Result<i64, EmptySeedsError> {
	almanac.seeds.iter()
		.map(|&seed| almanac.evaluate(seed))
		.min()
		.ok_or(EmptySeedsError)
}


fn input_almanac_from_str(s: &str) -> Almanac {
	s.parse().unwrap()
}

fn input_almanac() -> Almanac {
	input_almanac_from_str(include_str!("day05.txt"))
}


fn part1_impl(input_almanac: Almanac) -> i64 {
	min_location(&input_almanac).unwrap()
}

pub(crate) fn part1() -> i64 {
	part1_impl(input_almanac())
}


fn part2_impl(input_almanac: Almanac) -> i64 {
	use {itertools::Itertools as _, rayon::prelude::*};
	let ranges = input_almanac.seeds.iter().copied()
		.tuples()
		.collect::<Vec<(i64, i64)>>();
	ranges.into_par_iter()
		.flat_map(|(start, length)| (start..start + length).into_par_iter())
		.map(|seed| input_almanac.evaluate(seed))
		.min()
		.unwrap()
}

pub(crate) fn part2() -> i64 {
	part2_impl(input_almanac())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Almanac, Rule, Stage};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RuleError {
		Format { column: usize },
		DestinationStart(ParseIntError),
		SourceStart(ParseIntError),
		Length(ParseIntError),
		NegativeLength { length: i64 },
	}

	impl FromStr for Rule {
		type Err = RuleError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s_start = s.as_ptr();
			macro_rules! c { ( $s:expr ) => {
				// SAFETY: `$s` and `s_start` point into the same string slice
				unsafe { $s.as_ptr().offset_from(s_start) as usize }
			} }

			let destination_start = s.find(' ').map(|p| &s[..p]).unwrap_or(s);
			let s = &s[destination_start.len()..];
			let destination_start = destination_start.parse()
				.map_err(RuleError::DestinationStart)?;

			let s = s.strip_prefix(' ').ok_or(RuleError::Format { column: c!(s) + 1 })?;

			let source_start = s.find(' ').map(|p| &s[..p]).unwrap_or(s);
			let s = &s[source_start.len()..];
			let source_start = source_start.parse().map_err(RuleError::SourceStart)?;

			let s = s.strip_prefix(' ').ok_or(RuleError::Format { column: c!(s) + 1 })?;

			let length = s.parse().map_err(RuleError::Length)?;
			if length < 0 { return Err(RuleError::NegativeLength { length }) }

			Ok(Rule { source_start, destination_start, length })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum AlmanacError {
		Empty,
		NoSeedsPrefix,
		Seed { line: usize, column: usize, source: ParseIntError },
		ExpectedBlank { line: usize },
		StageHeader { line: usize },
		Rule { line: usize, source: RuleError },
	}

	impl FromStr for Almanac {
		type Err = AlmanacError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(AlmanacError::Empty) }

			enum State { Seeds, Blank, Header, Rules }

			let mut state = State::Seeds;
			let mut seeds = vec![];
			let mut stages: Vec<Stage> = vec![];

			for (l, line) in s.lines().enumerate() {
				state = match (state, line.is_empty()) {
					(State::Seeds, _) => {
						let list = line.strip_prefix("seeds:")
							.ok_or(AlmanacError::NoSeedsPrefix)?;
						for seed in list.split_ascii_whitespace() {
							seeds.push(seed.parse().map_err(|e| AlmanacError::Seed {
								line: l + 1,
								// SAFETY: `seed` and `line` point into the same string slice
								column: unsafe {
									seed.as_ptr().offset_from(line.as_ptr()) as usize } + 1,
								source: e,
							})?);
						}
						State::Blank
					}
					(State::Blank, true) => State::Header,
					(State::Blank, false) =>
						return Err(AlmanacError::ExpectedBlank { line: l + 1 }),
					(State::Header, _) => {
						let name = line.strip_suffix(" map:")
							.ok_or(AlmanacError::StageHeader { line: l + 1 })?;
						stages.push(Stage { name: name.to_owned(), rules: vec![] });
						State::Rules
					}
					(State::Rules, true) => State::Header,
					(State::Rules, false) => {
						let rule = line.parse()
							.map_err(|e| AlmanacError::Rule { line: l + 1, source: e })?;
						// `State::Rules` is only entered right after a stage is pushed
						stages.last_mut().unwrap().rules.push(rule);
						State::Rules
					}
				}
			}

			Ok(Almanac { seeds, stages })
		}
	}
}


#[cfg(test)]
fn test_stage(rules: &[(i64, i64, i64)]) -> Stage {
	Stage {
		name: "test".to_owned(),
		rules: rules.iter()
			.map(|&(destination_start, source_start, length)|
				Rule { source_start, destination_start, length })
			.collect(),
	}
}

#[cfg(test)]
#[test_case::test_case(49 => 49; "identity below the rules")]
#[test_case::test_case(50 => 52; "offset at first rule start")]
#[test_case::test_case(53 => 55; "offset within first rule")]
#[test_case::test_case(97 => 99; "offset at first rule end")]
#[test_case::test_case(98 => 50; "offset at second rule start")]
#[test_case::test_case(99 => 51; "offset at second rule end")]
#[test_case::test_case(100 => 100; "identity above the rules")]
fn lookup(value: i64) -> i64 {
	test_stage(&[(52, 50, 48), (50, 98, 2)]).lookup(value)
}

#[cfg(test)]
#[test_case::test_case(5 => 105; "last matching rule wins")]
#[test_case::test_case(15 => 15; "identity outside both rules")]
fn overlapping_lookup(value: i64) -> i64 {
	test_stage(&[(200, 0, 10), (100, 0, 10)]).lookup(value)
}

#[test]
fn degenerate_stages() {
	assert_eq!(test_stage(&[]).lookup(123), 123);
	assert_eq!(test_stage(&[(500, 100, 0)]).lookup(100), 100);
}

#[test]
fn evaluation_composes() {
	let chained = Almanac { seeds: vec![], stages:
		vec![test_stage(&[(10, 0, 5)]), test_stage(&[(100, 10, 5)])] };
	let first = Almanac { seeds: vec![], stages: vec![test_stage(&[(10, 0, 5)])] };
	let second = Almanac { seeds: vec![], stages: vec![test_stage(&[(100, 10, 5)])] };
	for seed in [0, 3, 4, 7] {
		assert_eq!(chained.evaluate(seed), second.evaluate(first.evaluate(seed)));
	}
}

#[test]
fn min_location_requires_seeds() {
	let almanac = Almanac { seeds: vec![], stages: vec![test_stage(&[(52, 50, 48)])] };
	assert!(min_location(&almanac).is_err());
}

#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		seeds: 79 14 55 13

		seed-to-soil map:
		50 98 2
		52 50 48

		soil-to-fertilizer map:
		0 15 37
		37 52 2
		39 0 15

		fertilizer-to-water map:
		49 53 8
		0 11 42
		42 0 7
		57 7 4

		water-to-light map:
		88 18 7
		18 25 70

		light-to-temperature map:
		45 77 23
		81 45 19
		68 64 13

		temperature-to-humidity map:
		0 69 1
		1 0 69

		humidity-to-location map:
		60 56 37
		56 93 4
	" };
	let almanac = input_almanac_from_str(INPUT);
	assert_eq!(almanac.seeds, [79, 14, 55, 13]);
	assert_eq!(almanac.stages.len(), 7);
	assert_eq!(almanac.stages[0].name, "seed-to-soil");
	assert_eq!(almanac.evaluate(79), 82);
	assert_eq!(part1_impl(input_almanac_from_str(INPUT)), 35);
	assert_eq!(part1(), 15871);
	assert_eq!(part2_impl(input_almanac_from_str(INPUT)), 46);
	assert_eq!(part2(), 219753548);
}
