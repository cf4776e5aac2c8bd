// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// A single map tile. `.` tiles act as hard walls; modeling them as a
/// variant rather than an out-of-range height keeps the `+ 1` climbing
/// rule from ever comparing against a sentinel.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile {
	Height(u8),
	Impassable,
}

#[cfg_attr(test, derive(Debug))]
struct HeightField {
	tiles: Vec<Tile>,
	width: usize,
}

#[allow(dead_code)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct OutOfBounds {
	x: usize,
	y: usize,
}

impl HeightField {
	#[allow(dead_code)]
	fn height(&self) -> usize {
		if self.width == 0 { 0 } else { self.tiles.len() / self.width }
	}

	/// Tile at `(x, y)`, erring on coordinates outside the field. The
	/// traversals below work on packed positions and guard bounds through
	/// `neighbors`, so an `OutOfBounds` from here never surfaces there.
	#[allow(dead_code)]
	fn height_at(&self, x: usize, y: usize) -> Result<Tile, OutOfBounds> {
		if x >= self.width || y >= self.height() { return Err(OutOfBounds { x, y }) }
		Ok(self.tiles[y * self.width + x])
	}

	/// In-bounds 4-directional neighbors of `pos`, in fixed
	/// up-down-left-right order for reproducible traversals.
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> {
		let w = self.width;
		let up = (pos >= w).then(|| pos - w);
		let down = (pos + w < self.tiles.len()).then(|| pos + w);
		let left = (pos % w > 0).then(|| pos - 1);
		let right = (pos % w < w - 1).then(|| pos + 1);
		[up, down, left, right].into_iter().flatten()
	}

	/// Trailheads are exactly the height-0 tiles; impassable tiles never match.
	fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
		self.tiles.iter()
			.enumerate()
			.filter(|&(_, &tile)| tile == Tile::Height(0))
			.map(|(pos, _)| pos)
	}
}


/// Positions of all height-9 tiles reachable from `start` by steps that
/// each climb exactly 1. Breadth-first; each position is enqueued at most
/// once, so the returned positions are distinct. Traversal needs no
/// termination special case: no tile has height 10.
fn reachable_nines(field: &HeightField, start: usize) -> Vec<usize> {
	use std::collections::VecDeque;

	let mut queue = VecDeque::from([start]);
	let mut visited = vec![false; field.tiles.len()];
	visited[start] = true;
	let mut nines = vec![];

	while let Some(pos) = queue.pop_front() {
		let Tile::Height(height) = field.tiles[pos] else { continue };
		if height == 9 { nines.push(pos) }

		for adj in field.neighbors(pos) {
			if visited[adj] || field.tiles[adj] != Tile::Height(height + 1) { continue }
			visited[adj] = true;
			queue.push_back(adj);
		}
	}

	nines
}


/// Per-position memo of trail counts. A position's count is independent of
/// how it was reached, so one table may serve every trailhead of a field;
/// it must never be reused across fields.
struct TrailCounts(Vec<Option<u64>>);

impl TrailCounts {
	fn new(field: &HeightField) -> Self {
		Self(vec![None; field.tiles.len()])
	}
}

/// Number of distinct strictly-climbing trails from `start` to any
/// height-9 tile. The legal transitions form a DAG stratified by height,
/// so the counts are evaluated post-order with an explicit stack; a
/// position is popped only once all of its `+ 1` neighbors are memoized.
fn count_trails(field: &HeightField, start: usize, counts: &mut TrailCounts) -> u64 {
	let mut stack = vec![start];
	while let Some(&pos) = stack.last() {
		if counts.0[pos].is_some() { stack.pop(); continue }

		let height = match field.tiles[pos] {
			Tile::Impassable => { counts.0[pos] = Some(0); stack.pop(); continue }
			Tile::Height(9) => { counts.0[pos] = Some(1); stack.pop(); continue }
			Tile::Height(height) => height,
		};

		let mut count = Some(0);
		for adj in field.neighbors(pos) {
			if field.tiles[adj] != Tile::Height(height + 1) { continue }
			match counts.0[adj] {
				Some(adj_count) => if let Some(count) = count.as_mut() { *count += adj_count },
				None => { count = None; stack.push(adj) }
			}
		}

		if let Some(count) = count {
			counts.0[pos] = Some(count);
			stack.pop();
		}
	}

	counts.0[start].unwrap()
}


fn input_field_from_str(s: &str) -> HeightField {
	s.parse().unwrap()
}

fn input_field() -> HeightField {
	input_field_from_str(include_str!("day10.txt"))
}


fn part1_impl(input_field: HeightField) -> usize {
	input_field.trailheads()
		.map(|pos| reachable_nines(&input_field, pos).len())
		.sum()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_field())
}


fn part2_impl(input_field: HeightField) -> u64 {
	let mut counts = TrailCounts::new(&input_field);
	input_field.trailheads()
		.map(|pos| count_trails(&input_field, pos, &mut counts))
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_field())
}


mod parsing {
	use std::str::FromStr;
	use super::{HeightField, Tile};

	impl TryFrom<u8> for Tile {
		type Error = ();
		fn try_from(value: u8) -> Result<Self, Self::Error> {
			match value {
				b'.' => Ok(Tile::Impassable),
				b if b.is_ascii_digit() => Ok(Tile::Height(b - b'0')),
				_ => Err(()),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightFieldError {
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for HeightField {
		type Err = HeightFieldError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut tiles = vec![];
			let mut width = None;

			for (l, line) in s.trim().lines().map(str::trim).enumerate() {
				for (c, b) in line.bytes().enumerate() {
					let tile = b.try_into().map_err(|_|
						HeightFieldError::InvalidByte { line: l + 1, column: c + 1, found: b })?;
					tiles.push(tile);
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len => return Err(
						HeightFieldError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}
			}

			// Zero rows is a valid, degenerate field: no trailheads, both answers 0.
			Ok(HeightField { tiles, width: width.unwrap_or(0) })
		}
	}
}


#[cfg(LOGGING)]
impl std::fmt::Display for HeightField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for y in 0..self.height() {
			for x in 0..self.width {
				f.write_char(match self.tiles[y * self.width + x] {
					Tile::Height(height) => (b'0' + height) as char,
					Tile::Impassable => '.',
				})?;
			}
			if y < self.height() - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


#[cfg(test)]
mod tests {
	use {indoc::indoc, test_case::test_case};
	use super::*;

	const SINGLE_NINE: &str = indoc! { "
		0123
		1234
		8765
		9876
	" };

	const FORKED_RIDGE: &str = indoc! { "
		..90..9
		...1.98
		...2..7
		6543456
		765.987
		876....
		987....
	" };

	const TRIPLE_FORK: &str = indoc! { "
		.....0.
		..4321.
		..5..2.
		..6543.
		..7..4.
		..8765.
		..9....
	" };

	const INTERLEAVED: &str = indoc! { "
		012345
		123456
		234567
		345678
		4.6789
		56789.
	" };

	const LARGER: &str = indoc! { "
		89010123
		78121874
		87430965
		96549874
		45678903
		32019012
		01329801
		10456732
	" };

	#[test_case(SINGLE_NINE => 1; "single nine")]
	#[test_case(indoc! { "
		...0...
		...1...
		...2...
		6543456
		7.....7
		8.....8
		9.....9
	" } => 2; "split descent")]
	#[test_case(FORKED_RIDGE => 4; "forked ridge")]
	#[test_case(indoc! { "
		10..9..
		2...8..
		3...7..
		4567654
		...8..3
		...9..2
		.....01
	" } => 3; "two trailheads")]
	#[test_case(LARGER => 36; "larger example")]
	fn scores(s: &str) -> usize {
		part1_impl(input_field_from_str(s))
	}

	#[test_case(TRIPLE_FORK => 3; "triple fork")]
	#[test_case(FORKED_RIDGE => 13; "forked ridge")]
	#[test_case(INTERLEAVED => 227; "interleaved")]
	#[test_case(LARGER => 81; "larger example")]
	fn ratings(s: &str) -> u64 {
		part2_impl(input_field_from_str(s))
	}

	#[test]
	fn height_at() {
		let field = input_field_from_str(LARGER);
		assert_eq!(field.height_at(0, 0), Ok(Tile::Height(8)));
		assert_eq!(field.height_at(2, 0), Ok(Tile::Height(0)));
		assert_eq!(field.height_at(8, 0), Err(OutOfBounds { x: 8, y: 0 }));
		assert_eq!(field.height_at(0, 8), Err(OutOfBounds { x: 0, y: 8 }));

		let field = input_field_from_str(FORKED_RIDGE);
		assert_eq!(field.height_at(0, 0), Ok(Tile::Impassable));
	}

	#[test]
	fn reachable_nines_are_nines() {
		let field = input_field_from_str(LARGER);
		for trailhead in field.trailheads() {
			let nines = reachable_nines(&field, trailhead);
			assert!(!nines.is_empty());
			for &pos in &nines {
				assert_eq!(field.tiles[pos], Tile::Height(9));
			}
			// Enqueued-at-most-once implies distinct members.
			let mut deduped = nines.clone();
			deduped.sort_unstable();
			deduped.dedup();
			assert_eq!(deduped.len(), nines.len());
		}
	}

	#[test]
	fn count_recurrence() {
		let field = input_field_from_str(LARGER);
		let mut warm = TrailCounts::new(&field);
		for trailhead in field.trailheads() {
			count_trails(&field, trailhead, &mut warm);
		}

		for pos in 0..field.tiles.len() {
			let Tile::Height(height) = field.tiles[pos] else { continue };
			if height == 9 { continue }

			let adj_sum = field.neighbors(pos)
				.filter(|&adj| field.tiles[adj] == Tile::Height(height + 1))
				.map(|adj| count_trails(&field, adj, &mut TrailCounts::new(&field)))
				.sum::<u64>();

			// Cold memo on the left, warm shared memo below; both must agree.
			assert_eq!(count_trails(&field, pos, &mut TrailCounts::new(&field)), adj_sum);
			assert_eq!(count_trails(&field, pos, &mut warm), adj_sum);
		}
	}

	#[test]
	fn count_base_cases() {
		let field = input_field_from_str("9");
		assert_eq!(count_trails(&field, 0, &mut TrailCounts::new(&field)), 1);
		// A lone `9` holds no trailheads, so both aggregates are 0.
		assert_eq!(part1_impl(input_field_from_str("9")), 0);
		assert_eq!(part2_impl(input_field_from_str("9")), 0);

		let field = input_field_from_str(FORKED_RIDGE);
		assert_eq!(field.tiles[0], Tile::Impassable);
		assert_eq!(count_trails(&field, 0, &mut TrailCounts::new(&field)), 0);
	}

	#[test]
	fn walled_in_trailhead() {
		const INPUT: &str = indoc! { "
			...
			.0.
			...
		" };
		assert_eq!(part1_impl(input_field_from_str(INPUT)), 0);
		assert_eq!(part2_impl(input_field_from_str(INPUT)), 0);
	}

	#[test]
	fn degenerate_field() {
		assert_eq!(part1_impl(input_field_from_str("")), 0);
		assert_eq!(part2_impl(input_field_from_str("")), 0);
		assert_eq!(part1_impl(input_field_from_str("\n  \n")), 0);
	}

	#[test]
	fn idempotence() {
		let field = input_field_from_str(LARGER);
		let trailhead = field.trailheads().next().unwrap();
		assert_eq!(reachable_nines(&field, trailhead), reachable_nines(&field, trailhead));

		let mut counts = TrailCounts::new(&field);
		let first = count_trails(&field, trailhead, &mut counts);
		assert_eq!(count_trails(&field, trailhead, &mut counts), first);
		assert_eq!(count_trails(&field, trailhead, &mut TrailCounts::new(&field)), first);
	}

	#[test]
	fn parse_errors() {
		assert!(matches!(
			"012\n3x5\n678".parse::<HeightField>(),
			Err(parsing::HeightFieldError::InvalidByte { line: 2, column: 2, found: b'x' })));
		assert!(matches!(
			"012\n34\n678".parse::<HeightField>(),
			Err(parsing::HeightFieldError::LineLen { line: 2, len: 3, found: 2 })));
	}

	#[test]
	fn parts() {
		assert_eq!(part1(), 36);
		assert_eq!(part2(), 81);
	}
}
