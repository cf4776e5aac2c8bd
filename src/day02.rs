// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// A report is safe when its consecutive differences are either all in
/// `1..=3` or all in `-3..=-1`.
fn is_safe(levels: &[u8]) -> bool {
	use itertools::Itertools as _;

	if levels.len() < 2 { return false }

	let mut diffs = levels.iter().tuple_windows().map(|(&a, &b)| b as i16 - a as i16);
	let first = diffs.next().unwrap();
	if !(1..=3).contains(&first.abs()) { return false }

	let range = if first > 0 { 1..=3 } else { -3..=-1 };
	diffs.all(|diff| range.contains(&diff))
}

/// Safe as-is, or safe after deleting any single level.
fn is_safe_dampened(levels: &[u8]) -> bool {
	if is_safe(levels) { return true }

	(0..levels.len()).any(|i| {
		let mut dampened = levels.to_vec();
		dampened.remove(i);
		is_safe(&dampened)
	})
}


fn input_reports_from_str(s: &str) -> impl Iterator<Item = Vec<u8>> + '_ {
	parsing::reports_from_str(s).map(|r| r.unwrap())
}

fn input_reports() -> impl Iterator<Item = Vec<u8>> {
	input_reports_from_str(include_str!("day02.txt"))
}


fn part1_impl(input_reports: impl Iterator<Item = Vec<u8>>) -> usize {
	input_reports.filter(|levels| is_safe(levels)).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_reports())
}


fn part2_impl(input_reports: impl Iterator<Item = Vec<u8>>) -> usize {
	input_reports.filter(|levels| is_safe_dampened(levels)).count()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_reports())
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportsError {
		Empty,
		Level { line: usize, column: usize, source: ParseIntError },
	}

	pub(super) fn reports_from_str(s: &str)
	-> impl Iterator<Item = Result<Vec<u8>, ReportsError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.is_empty() { return Either::Left(once(Err(ReportsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.split_ascii_whitespace()
				.enumerate()
				.map(|(i, level)| level.parse().map_err(|e|
					ReportsError::Level { line: l + 1, column: i + 1, source: e }))
				.collect()))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
	" };
	assert!(!is_safe(&[7]));
	assert!(is_safe(&[1, 4, 7]));
	assert!(!is_safe(&[1, 4, 3]));
	assert_eq!(part1_impl(input_reports_from_str(INPUT)), 2);
	assert_eq!(part1(), 2);
	assert_eq!(part2_impl(input_reports_from_str(INPUT)), 4);
	assert_eq!(part2(), 4);
}
