// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
	Mul(u32, u32),
	Do,
	Dont,
}


fn input_instructions_from_str(s: &str) -> impl Iterator<Item = Instruction> + '_ {
	parsing::Scanner(s)
}

fn input_instructions() -> impl Iterator<Item = Instruction> + 'static {
	input_instructions_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_instructions: impl Iterator<Item = Instruction>) -> u32 {
	input_instructions
		.map(|instruction| match instruction {
			Instruction::Mul(x, y) => x * y,
			_ => 0,
		})
		.sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(input_instructions())
}


fn part2_impl(input_instructions: impl Iterator<Item = Instruction>) -> u32 {
	input_instructions
		.scan(true, |enabled, instruction| Some(match instruction {
			Instruction::Do => { *enabled = true; 0 }
			Instruction::Dont => { *enabled = false; 0 }
			Instruction::Mul(x, y) if *enabled => x * y,
			Instruction::Mul(..) => 0,
		}))
		.sum()
}

pub(crate) fn part2() -> u32 {
	part2_impl(input_instructions())
}


mod parsing {
	use super::Instruction;

	/// Scans corrupted memory for recognizable instructions, skipping
	/// over everything else a character at a time. Corruption is expected,
	/// so there is nothing to report as an error.
	pub(super) struct Scanner<'s>(pub(super) &'s str);

	/// A 1–3 digit operand.
	fn number(s: &str) -> Option<(u32, &str)> {
		let len = s.bytes().take_while(u8::is_ascii_digit).count();
		if !(1..=3).contains(&len) { return None }
		Some((s[..len].parse().ok()?, &s[len..]))
	}

	fn instruction(s: &str) -> Option<(Instruction, &str)> {
		if let Some(rest) = s.strip_prefix("do()") { return Some((Instruction::Do, rest)) }
		if let Some(rest) = s.strip_prefix("don't()") { return Some((Instruction::Dont, rest)) }
		let rest = s.strip_prefix("mul(")?;
		let (x, rest) = number(rest)?;
		let rest = rest.strip_prefix(',')?;
		let (y, rest) = number(rest)?;
		let rest = rest.strip_prefix(')')?;
		Some((Instruction::Mul(x, y), rest))
	}

	impl<'s> Iterator for Scanner<'s> {
		type Item = Instruction;
		fn next(&mut self) -> Option<Instruction> {
			while !self.0.is_empty() {
				if let Some((instruction, rest)) = instruction(self.0) {
					self.0 = rest;
					return Some(instruction)
				}
				let mut chars = self.0.chars();
				chars.next();
				self.0 = chars.as_str();
			}
			None
		}
	}
}


#[test]
fn tests() {
	const INPUT_PART1: &str =
		"xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
	const INPUT_PART2: &str =
		"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

	assert_eq!(
		input_instructions_from_str("mul(4*, mul(6,9!, ?(12,34), mul ( 2 , 4 ), mul(1,234)")
			.collect::<Vec<_>>(),
		vec![Instruction::Mul(1, 234)]);
	assert_eq!(part1_impl(input_instructions_from_str(INPUT_PART1)), 161);
	assert_eq!(part1(), 161);
	assert_eq!(part2_impl(input_instructions_from_str(INPUT_PART2)), 48);
	assert_eq!(part2(), 48);
}
