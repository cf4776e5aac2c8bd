// Copyright (c) 2024 Bastiaan Marinus van de Weerd


struct Field {
	antennas: Vec<(u8, i32, i32)>,
	width: i32,
	height: i32,
}


fn gcd(mut a: i32, mut b: i32) -> i32 {
	while b != 0 { (a, b) = (b, a % b) }
	a
}


/// Part 1 projects the two mirror points of each same-frequency pair;
/// part 2 (`resonant`) instead walks the pair's whole line through the
/// field, stepping by the gcd-normalized offset.
fn part1and2_impl(input_field: Field, resonant: bool) -> usize {
	use {either::Either, itertools::Itertools as _};

	let in_bounds = |&(x, y): &(i32, i32)|
		(0..input_field.width).contains(&x) && (0..input_field.height).contains(&y);

	let by_frequency = input_field.antennas.iter()
		.map(|&(frequency, x, y)| (frequency, (x, y)))
		.into_group_map();

	let mut antinodes = vec![false; (input_field.width * input_field.height) as usize];
	for positions in by_frequency.values() {
		for (&(ax, ay), &(bx, by)) in positions.iter().tuple_combinations() {
			let (dx, dy) = (bx - ax, by - ay);

			let pair_antinodes = if resonant {
				let gcd = gcd(dx.abs(), dy.abs());
				let (sx, sy) = (dx / gcd, dy / gcd);
				Either::Left((0..)
					.map(move |i| (ax - sx * i, ay - sy * i))
					.take_while(in_bounds)
					.chain((1..)
						.map(move |i| (ax + sx * i, ay + sy * i))
						.take_while(in_bounds)))
			} else {
				Either::Right([(ax - dx, ay - dy), (bx + dx, by + dy)]
					.into_iter()
					.filter(in_bounds))
			};

			for (x, y) in pair_antinodes {
				antinodes[(y * input_field.width + x) as usize] = true;
			}
		}
	}

	antinodes.into_iter().filter(|&antinode| antinode).count()
}


fn input_field_from_str(s: &str) -> Field {
	s.parse().unwrap()
}

fn input_field() -> Field {
	input_field_from_str(include_str!("day08.txt"))
}


pub(crate) fn part1() -> usize {
	part1and2_impl(input_field(), false)
}

pub(crate) fn part2() -> usize {
	part1and2_impl(input_field(), true)
}


mod parsing {
	use std::str::FromStr;
	use super::Field;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum FieldError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Field {
		type Err = FieldError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(FieldError::Empty) }

			let mut antennas = vec![];
			let mut width = None;
			let mut height = 0;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					match b {
						b'.' => (),
						b if b.is_ascii_alphanumeric() =>
							antennas.push((b, c as i32, l as i32)),
						found => return Err(FieldError::InvalidByte {
							line: l + 1, column: c + 1, found }),
					}
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len => return Err(
						FieldError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}

				height += 1;
			}

			Ok(Field { antennas, width: width.unwrap() as i32, height })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		............
		........0...
		.....0......
		.......0....
		....0.......
		......A.....
		............
		............
		........A...
		.........A..
		............
		............
	" };

	#[test]
	fn mirror_antinodes() {
		assert_eq!(part1and2_impl(input_field_from_str(INPUT), false), 14);
		assert_eq!(part1(), 14);
	}

	#[test]
	fn resonant_antinodes() {
		const T_INPUT: &str = indoc::indoc! { "
			T.........
			...T......
			.T........
			..........
			..........
			..........
			..........
			..........
			..........
			..........
		" };
		assert_eq!(part1and2_impl(input_field_from_str(T_INPUT), true), 9);

		assert_eq!(part1and2_impl(input_field_from_str(INPUT), true), 34);
		assert_eq!(part2(), 34);
	}
}
