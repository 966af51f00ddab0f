// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Card {
	#[allow(dead_code)]
	id: u32,
	winning: Vec<u32>,
	have: Vec<u32>,
}

impl Card {
	fn matches(&self) -> usize {
		self.have.iter().filter(|n| self.winning.contains(n)).count()
	}
}


fn input_cards_from_str(s: &str) -> impl Iterator<Item = Card> + '_ {
	parsing::cards_from_str(s).map(|r| r.unwrap())
}

fn input_cards() -> impl Iterator<Item = Card> + 'static {
	input_cards_from_str(include_str!("day04.txt"))
}


fn part1_impl(input_cards: impl Iterator<Item = Card>) -> u64 {
	input_cards
		.map(|card| match card.matches() { 0 => 0, matches => 1 << (matches - 1) })
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_cards())
}


fn part2_impl(input_cards: impl Iterator<Item = Card>) -> u64 {
	let matches = input_cards.map(|card| card.matches()).collect::<Vec<_>>();
	let mut copies = vec![1u64; matches.len()];
	for (i, &matches) in matches.iter().enumerate() {
		for j in i + 1..(i + 1 + matches).min(copies.len()) {
			copies[j] += copies[i];
		}
	}
	copies.into_iter().sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_cards())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use either::Either;
	use super::Card;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CardError {
		Format { column: usize },
		Id(ParseIntError),
		/// Left is a winning number, right a number you have.
		Number { column: usize, source: Either<ParseIntError, ParseIntError> },
	}

	impl FromStr for Card {
		type Err = CardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s_start = s.as_ptr();
			macro_rules! c { ( $s:expr ) => {
				// SAFETY: `$s` and `s_start` point into the same string slice
				unsafe { $s.as_ptr().offset_from(s_start) as usize }
			} }

			let s = s.strip_prefix("Card").ok_or(CardError::Format { column: 1 })?;

			let (id, s) = s.split_once(':')
				.ok_or(CardError::Format { column: c!(s) + 1 })?;
			let id = id.trim_start().parse().map_err(CardError::Id)?;

			let (winning, have) = s.split_once(" | ")
				.ok_or(CardError::Format { column: c!(s) + 1 })?;

			let numbers = |list: &str, side: fn(ParseIntError)
			-> Either<ParseIntError, ParseIntError>| list
				.split_ascii_whitespace()
				.map(|n| n.parse().map_err(|e| CardError::Number {
					column: c!(n) + 1, source: side(e) }))
				.collect::<Result<Vec<u32>, _>>();

			let winning = numbers(winning, Either::Left)?;
			let have = numbers(have, Either::Right)?;

			Ok(Card { id, winning, have })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CardsError {
		Empty,
		Card { line: usize, source: CardError },
	}

	pub(super) fn cards_from_str(s: &str)
	-> impl Iterator<Item = Result<Card, CardsError>> + '_ {
		use {std::iter::once, itertools::Either::*};
		if s.is_empty() { return Left(once(Err(CardsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| CardsError::Card { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
		Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
		Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
		Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
		Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
		Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
	" };
	assert_eq!(part1_impl(input_cards_from_str(INPUT)), 13);
	assert_eq!(part1(), 1697);
	assert_eq!(part2_impl(input_cards_from_str(INPUT)), 30);
	assert_eq!(part2(), 28803);
}
