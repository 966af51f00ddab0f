// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cubes {
	red: u32,
	green: u32,
	blue: u32,
}

#[cfg_attr(test, derive(Debug))]
struct Game {
	id: u32,
	draws: Vec<Cubes>,
}

impl Cubes {
	fn contains(&self, other: &Cubes) -> bool {
		self.red >= other.red && self.green >= other.green && self.blue >= other.blue
	}
}

impl Game {
	fn fewest_cubes(&self) -> Cubes {
		self.draws.iter().fold(Cubes { red: 0, green: 0, blue: 0 }, |acc, draw| Cubes {
			red: acc.red.max(draw.red),
			green: acc.green.max(draw.green),
			blue: acc.blue.max(draw.blue),
		})
	}
}


fn input_games_from_str(s: &str) -> impl Iterator<Item = Game> + '_ {
	parsing::games_from_str(s).map(|r| r.unwrap())
}

fn input_games() -> impl Iterator<Item = Game> + 'static {
	input_games_from_str(include_str!("day02.txt"))
}


const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };

fn part1_impl(input_games: impl Iterator<Item = Game>) -> u32 {
	input_games
		.filter(|game| game.draws.iter().all(|draw| BAG.contains(draw)))
		.map(|game| game.id)
		.sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(input_games())
}


fn part2_impl(input_games: impl Iterator<Item = Game>) -> u32 {
	input_games
		.map(|game| {
			let Cubes { red, green, blue } = game.fewest_cubes();
			red * green * blue
		})
		.sum()
}

pub(crate) fn part2() -> u32 {
	part2_impl(input_games())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Cubes, Game};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DrawError {
		NoSpace,
		Count(ParseIntError),
		Color { found: String },
		DuplicateColor { color: String },
	}

	impl FromStr for Cubes {
		type Err = DrawError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut cubes = Cubes { red: 0, green: 0, blue: 0 };
			for part in s.split(", ") {
				let (count, color) = part.split_once(' ')
					.ok_or(DrawError::NoSpace)?;
				let count = count.parse().map_err(DrawError::Count)?;
				let slot = match color {
					"red" => &mut cubes.red,
					"green" => &mut cubes.green,
					"blue" => &mut cubes.blue,
					found => return Err(DrawError::Color { found: found.to_owned() }),
				};
				if *slot > 0 {
					return Err(DrawError::DuplicateColor { color: color.to_owned() })
				}
				*slot = count;
			}
			Ok(cubes)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GameError {
		Format { column: usize },
		Id(ParseIntError),
		Draw { column: usize, source: DrawError },
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s_start = s.as_ptr();
			macro_rules! c { ( $s:expr ) => {
				// SAFETY: `$s` and `s_start` point into the same string slice
				unsafe { $s.as_ptr().offset_from(s_start) as usize }
			} }

			let s = s.strip_prefix("Game ").ok_or(GameError::Format { column: 1 })?;

			let (id, s) = s.split_once(": ")
				.ok_or(GameError::Format { column: c!(s) + 1 })?;
			let id = id.parse().map_err(GameError::Id)?;

			let draws = s.split("; ")
				.map(|draw| draw.parse()
					.map_err(|e| GameError::Draw { column: c!(draw) + 1, source: e }))
				.collect::<Result<_, _>>()?;

			Ok(Game { id, draws })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GamesError {
		Empty,
		Game { line: usize, source: GameError },
	}

	pub(super) fn games_from_str(s: &str)
	-> impl Iterator<Item = Result<Game, GamesError>> + '_ {
		use {std::iter::once, itertools::Either::*};
		if s.is_empty() { return Left(once(Err(GamesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| GamesError::Game { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };
	let game = input_games_from_str(INPUT).nth(2).unwrap();
	assert_eq!(game.fewest_cubes(), Cubes { red: 20, green: 13, blue: 6 });
	assert_eq!(part1_impl(input_games_from_str(INPUT)), 8);
	assert_eq!(part1(), 491);
	assert_eq!(part2_impl(input_games_from_str(INPUT)), 2286);
	assert_eq!(part2(), 211134);
}
