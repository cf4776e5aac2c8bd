// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// Facings are numbered clockwise from up; turning right is `+ 1 mod 4`.
struct Map {
	obstacles: Vec<bool>,
	width: usize,
	start: usize,
	facing: u8,
}

impl Map {
	/// Position one step ahead of `pos`, or `None` when that leaves the map.
	fn ahead(&self, pos: usize, facing: u8) -> Option<usize> {
		let w = self.width;
		match facing {
			0 => (pos >= w).then(|| pos - w),
			1 => (pos % w < w - 1).then(|| pos + 1),
			2 => (pos + w < self.obstacles.len()).then(|| pos + w),
			_ => (pos % w > 0).then(|| pos - 1),
		}
	}

	/// Walks the guard off the map, returning the per-position visited table.
	fn patrol(&self) -> Vec<bool> {
		let mut visited = vec![false; self.obstacles.len()];
		let (mut pos, mut facing) = (self.start, self.facing);
		visited[pos] = true;

		while let Some(ahead) = self.ahead(pos, facing) {
			if self.obstacles[ahead] {
				facing = (facing + 1) % 4
			} else {
				pos = ahead;
				visited[pos] = true
			}
		}

		visited
	}

	/// Whether an extra obstruction at `extra` traps the guard in a loop.
	/// A loop is a revisited (position, facing) pair; facings are tracked
	/// as per-position bitmasks.
	fn loops_with_obstruction(&self, extra: usize) -> bool {
		let mut seen = vec![0_u8; self.obstacles.len()];
		let (mut pos, mut facing) = (self.start, self.facing);

		loop {
			let bit = 1 << facing;
			if seen[pos] & bit != 0 { return true }
			seen[pos] |= bit;

			match self.ahead(pos, facing) {
				None => return false,
				Some(ahead) if self.obstacles[ahead] || ahead == extra =>
					facing = (facing + 1) % 4,
				Some(ahead) => pos = ahead,
			}
		}
	}
}


fn input_map_from_str(s: &str) -> Map {
	s.parse().unwrap()
}

fn input_map() -> Map {
	input_map_from_str(include_str!("day06.txt"))
}


fn part1_impl(input_map: Map) -> usize {
	input_map.patrol().into_iter().filter(|&visited| visited).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_map())
}


/// Only positions on the unobstructed route can deflect the guard, so only
/// those are candidate obstructions; the start itself is off-limits.
fn part2_impl(input_map: Map) -> usize {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let candidates = input_map.patrol()
		.into_iter()
		.enumerate()
		.filter(|&(pos, visited)| visited && pos != input_map.start)
		.map(|(pos, _)| pos)
		.collect::<Vec<_>>();

	candidates.into_par_iter()
		.filter(|&pos| input_map.loops_with_obstruction(pos))
		.count()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_map())
}


mod parsing {
	use std::str::FromStr;
	use super::Map;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MapError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateGuard { line: usize, column: usize },
		NoGuard,
	}

	impl FromStr for Map {
		type Err = MapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(MapError::Empty) }

			let mut obstacles = vec![];
			let mut width = None;
			let mut guard = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					let facing = match b {
						b'.' => { obstacles.push(false); continue }
						b'#' => { obstacles.push(true); continue }
						b'^' => 0,
						b'>' => 1,
						b'v' => 2,
						b'<' => 3,
						found => return Err(MapError::InvalidByte {
							line: l + 1, column: c + 1, found }),
					};

					if guard.is_some() { return Err(MapError::DuplicateGuard {
						line: l + 1, column: c + 1 }) }
					guard = Some((obstacles.len(), facing));
					obstacles.push(false);
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len => return Err(
						MapError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}
			}

			let (start, facing) = guard.ok_or(MapError::NoGuard)?;
			Ok(Map { obstacles, width: width.unwrap(), start, facing })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		....#.....
		.........#
		..........
		..#.......
		.......#..
		..........
		.#..^.....
		........#.
		#.........
		......#...
	" };

	#[test]
	fn patrol() {
		assert_eq!(part1_impl(input_map_from_str(INPUT)), 41);
		assert_eq!(part1(), 41);
	}

	#[test]
	fn obstructions() {
		let map = input_map_from_str(INPUT);
		// The puzzle's first suggested obstruction, left of the lower obstacle.
		assert!(map.loops_with_obstruction(6 * 10 + 3));
		assert!(!map.loops_with_obstruction(0));

		assert_eq!(part2_impl(input_map_from_str(INPUT)), 6);
		assert_eq!(part2(), 6);
	}
}
