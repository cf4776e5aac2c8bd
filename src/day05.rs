// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


/// Precedence rules as `(before, after)` page pairs. Pages are two-digit
/// numbers, which keeps the page-indexed tables below small.
struct Rules(HashSet<(u8, u8)>);

impl Rules {
	/// An update is ordered when no two of its pages, in the order given,
	/// contradict a rule.
	fn is_ordered(&self, update: &[u8]) -> bool {
		use itertools::Itertools as _;
		update.iter().tuple_combinations().all(|(&a, &b)| !self.0.contains(&(b, a)))
	}

	/// Reorders an update's pages via Kahn's algorithm over the rules
	/// restricted to those pages.
	fn reordered(&self, update: &[u8]) -> Vec<u8> {
		use {std::collections::VecDeque, itertools::Itertools as _};

		let mut successors = vec![vec![]; 100];
		let mut in_degrees = [0_usize; 100];
		for (&a, &b) in update.iter().tuple_combinations() {
			let (from, to) = if self.0.contains(&(b, a)) { (b, a) }
				else if self.0.contains(&(a, b)) { (a, b) }
				else { continue };
			successors[from as usize].push(to);
			in_degrees[to as usize] += 1;
		}

		let mut queue = update.iter()
			.copied()
			.filter(|&page| in_degrees[page as usize] == 0)
			.collect::<VecDeque<_>>();
		let mut sorted = Vec::with_capacity(update.len());
		while let Some(page) = queue.pop_front() {
			sorted.push(page);
			for &next in &successors[page as usize] {
				in_degrees[next as usize] -= 1;
				if in_degrees[next as usize] == 0 { queue.push_back(next) }
			}
		}

		sorted
	}
}

fn middle_page(update: &[u8]) -> u32 {
	update[update.len() / 2] as u32
}


fn input_from_str(s: &str) -> (Rules, Vec<Vec<u8>>) {
	let (rules, updates) = parsing::try_rules_and_updates_from_str(s).unwrap();
	(rules, updates.map(|r| r.unwrap()).collect())
}

fn input() -> (Rules, Vec<Vec<u8>>) {
	input_from_str(include_str!("day05.txt"))
}


fn part1_impl(input: (Rules, Vec<Vec<u8>>)) -> u32 {
	let (rules, updates) = input;
	updates.iter()
		.filter(|update| rules.is_ordered(update))
		.map(|update| middle_page(update))
		.sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(input())
}


fn part2_impl(input: (Rules, Vec<Vec<u8>>)) -> u32 {
	let (rules, updates) = input;
	updates.iter()
		.filter(|update| !rules.is_ordered(update))
		.map(|update| middle_page(&rules.reordered(update)))
		.sum()
}

pub(crate) fn part2() -> u32 {
	part2_impl(input())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Rules;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InputError {
		Rule { line: usize, source: RuleError },
		NoBlank,
		NoUpdates,
		Page { line: usize, column: usize, source: ParseIntError },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RuleError {
		Format,
		Page(ParseIntError),
	}

	fn try_rule_from_str(s: &str) -> Result<(u8, u8), RuleError> {
		let (before, after) = s.split_once('|').ok_or(RuleError::Format)?;
		Ok((
			before.parse().map_err(RuleError::Page)?,
			after.parse().map_err(RuleError::Page)?,
		))
	}

	pub(super) fn try_rules_and_updates_from_str(s: &str) -> Result<(
		Rules,
		impl Iterator<Item = Result<Vec<u8>, InputError>> + '_
	), InputError> {
		let mut lines = s.lines().enumerate();

		let mut rules = std::collections::HashSet::new();
		loop {
			match lines.next() {
				None => return Err(InputError::NoBlank),
				Some((_, "")) => break,
				Some((l, line)) => {
					rules.insert(try_rule_from_str(line)
						.map_err(|e| InputError::Rule { line: l + 1, source: e })?);
				}
			}
		}

		let mut lines = lines.peekable();
		if lines.peek().is_none() { return Err(InputError::NoUpdates) }

		Ok((Rules(rules), lines.map(|(l, line)| line.split(',')
			.enumerate()
			.map(|(i, page)| page.trim().parse().map_err(|e|
				InputError::Page { line: l + 1, column: i + 1, source: e }))
			.collect())))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };

	let (rules, _) = input_from_str(INPUT);
	assert!(rules.is_ordered(&[75, 47, 61, 53, 29]));
	assert!(!rules.is_ordered(&[75, 97, 47, 61, 53]));
	assert_eq!(rules.reordered(&[75, 97, 47, 61, 53]), [97, 75, 47, 61, 53]);
	assert_eq!(rules.reordered(&[97, 13, 75, 29, 47]), [97, 75, 47, 29, 13]);

	assert_eq!(part1_impl(input_from_str(INPUT)), 143);
	assert_eq!(part1(), 143);
	assert_eq!(part2_impl(input_from_str(INPUT)), 123);
	assert_eq!(part2(), 123);
}
