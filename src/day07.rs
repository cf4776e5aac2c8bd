// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Equation {
	target: u64,
	operands: Vec<u64>,
}

impl Equation {
	/// Left-to-right search over operator placements; `concat` enables the
	/// digit-concatenation operator. All operators are value-increasing on
	/// positive operands, so a running value past the target is pruned.
	fn is_solvable(&self, concat: bool) -> bool {
		fn search(target: u64, acc: u64, operands: &[u64], concat: bool) -> bool {
			let Some((&next, rest)) = operands.split_first() else { return acc == target };
			if acc > target { return false }
			search(target, acc + next, rest, concat)
				|| search(target, acc * next, rest, concat)
				|| concat && search(target, concat_digits(acc, next), rest, concat)
		}

		let Some((&first, rest)) = self.operands.split_first() else { return false };
		search(self.target, first, rest, concat)
	}
}

/// `concat_digits(12, 345) == 12345`.
fn concat_digits(a: u64, b: u64) -> u64 {
	let mut shift = 10;
	while shift <= b { shift *= 10 }
	a * shift + b
}


fn input_equations_from_str(s: &str) -> impl Iterator<Item = Equation> + '_ {
	parsing::equations_from_str(s).map(|r| r.unwrap())
}

fn input_equations() -> impl Iterator<Item = Equation> + 'static {
	input_equations_from_str(include_str!("day07.txt"))
}


fn part1and2_impl(input_equations: impl Iterator<Item = Equation>, concat: bool) -> u64 {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	input_equations.collect::<Vec<_>>()
		.into_par_iter()
		.filter(|equation| equation.is_solvable(concat))
		.map(|equation| equation.target)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1and2_impl(input_equations(), false)
}

pub(crate) fn part2() -> u64 {
	part1and2_impl(input_equations(), true)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Equation;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EquationError {
		Format,
		Target(ParseIntError),
		Operand { column: usize, source: ParseIntError },
		NoOperands,
	}

	impl FromStr for Equation {
		type Err = EquationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (target, operands) = s.split_once(':').ok_or(EquationError::Format)?;
			let target = target.parse().map_err(EquationError::Target)?;
			let operands = operands.split_ascii_whitespace()
				.enumerate()
				.map(|(i, operand)| operand.parse().map_err(|e|
					EquationError::Operand { column: i + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?;
			if operands.is_empty() { return Err(EquationError::NoOperands) }
			Ok(Equation { target, operands })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EquationsError {
		Empty,
		Equation { line: usize, source: EquationError },
	}

	pub(super) fn equations_from_str(s: &str)
	-> impl Iterator<Item = Result<Equation, EquationsError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.is_empty() { return Either::Left(once(Err(EquationsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse().map_err(|e|
				EquationsError::Equation { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };
	assert_eq!(concat_digits(12, 345), 12_345);
	assert_eq!(concat_digits(6, 0), 60);
	assert!("3267: 81 40 27".parse::<Equation>().unwrap().is_solvable(false));
	assert!(!"156: 15 6".parse::<Equation>().unwrap().is_solvable(false));
	assert!("156: 15 6".parse::<Equation>().unwrap().is_solvable(true));
	assert_eq!(part1and2_impl(input_equations_from_str(INPUT), false), 3749);
	assert_eq!(part1(), 3749);
	assert_eq!(part1and2_impl(input_equations_from_str(INPUT), true), 11387);
	assert_eq!(part2(), 11387);
}
