// Copyright (c) 2024 Bastiaan Marinus van de Weerd


struct Grid {
	letters: Vec<u8>,
	width: usize,
}

impl Grid {
	fn letter(&self, x: usize, y: usize) -> u8 {
		self.letters[y * self.width + x]
	}

	fn height(&self) -> usize {
		self.letters.len() / self.width
	}
}


fn input_grid_from_str(s: &str) -> Grid {
	s.parse().unwrap()
}

fn input_grid() -> Grid {
	input_grid_from_str(include_str!("day04.txt"))
}


/// Counts straight rays spelling `XMAS` in any of the 8 directions.
fn part1_impl(input_grid: Grid) -> usize {
	use itertools::iproduct;

	const WORD: &[u8] = b"XMAS";

	let (w, h) = (input_grid.width as isize, input_grid.height() as isize);
	let mut count = 0;
	for (y, x) in iproduct!(0..h, 0..w) {
		if input_grid.letter(x as usize, y as usize) != WORD[0] { continue }

		for (dy, dx) in iproduct!(-1..=1, -1..=1) {
			if (dx, dy) == (0, 0) { continue }

			if (1..WORD.len() as isize).all(|i| {
				let (x, y) = (x + dx * i, y + dy * i);
				(0..w).contains(&x) && (0..h).contains(&y)
					&& input_grid.letter(x as usize, y as usize) == WORD[i as usize]
			}) { count += 1 }
		}
	}

	count
}

pub(crate) fn part1() -> usize {
	part1_impl(input_grid())
}


/// Counts `A`-centered crosses whose both diagonals spell `MAS` or `SAM`.
fn part2_impl(input_grid: Grid) -> usize {
	use itertools::iproduct;

	let (w, h) = (input_grid.width, input_grid.height());
	let diagonal = |a: u8, b: u8| matches!((a, b), (b'M', b'S') | (b'S', b'M'));

	let mut count = 0;
	for (y, x) in iproduct!(1..h.saturating_sub(1), 1..w.saturating_sub(1)) {
		if input_grid.letter(x, y) != b'A' { continue }

		if diagonal(input_grid.letter(x - 1, y - 1), input_grid.letter(x + 1, y + 1))
			&& diagonal(input_grid.letter(x - 1, y + 1), input_grid.letter(x + 1, y - 1)) {
			count += 1
		}
	}

	count
}

pub(crate) fn part2() -> usize {
	part2_impl(input_grid())
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(GridError::Empty) }

			let mut letters = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_uppercase() {
						return Err(GridError::InvalidByte {
							line: l + 1, column: c + 1, found: b })
					}
					letters.push(b);
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len => return Err(
						GridError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}
			}

			Ok(Grid { letters, width: width.unwrap() })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };
	assert_eq!(part1_impl(input_grid_from_str(INPUT)), 18);
	assert_eq!(part1(), 18);
	assert_eq!(part2_impl(input_grid_from_str(INPUT)), 9);
	assert_eq!(part2(), 9);
}
