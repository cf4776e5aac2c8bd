// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// Alternating file/free run lengths; even indexes are files, with
/// `index / 2` as the file id.
#[cfg_attr(test, derive(Debug))]
struct DiskMap(Vec<u8>);

impl DiskMap {
	/// Expands the run lengths to individual blocks; `None` is free space.
	fn blocks(&self) -> Vec<Option<u32>> {
		let mut blocks = vec![];
		for (i, &len) in self.0.iter().enumerate() {
			let id = (i % 2 == 0).then(|| i as u32 / 2);
			blocks.extend(std::iter::repeat(id).take(len as usize));
		}
		blocks
	}
}

fn checksum(blocks: &[Option<u32>]) -> u64 {
	blocks.iter()
		.enumerate()
		.filter_map(|(i, id)| id.map(|id| i as u64 * id as u64))
		.sum()
}


fn input_disk_map_from_str(s: &str) -> DiskMap {
	s.parse().unwrap()
}

fn input_disk_map() -> DiskMap {
	input_disk_map_from_str(include_str!("day09.txt"))
}


/// Two-pointer compaction: repeatedly move the rightmost file block into
/// the leftmost free block.
fn part1_impl(input_disk_map: DiskMap) -> u64 {
	let mut blocks = input_disk_map.blocks();

	let (mut i, mut j) = (0, blocks.len());
	loop {
		while i < j && blocks[i].is_some() { i += 1 }
		while i < j && blocks[j - 1].is_none() { j -= 1 }
		if i >= j { break }
		blocks.swap(i, j - 1);
	}

	checksum(&blocks)
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_disk_map())
}


/// Whole-file compaction: files in decreasing id order each move once, to
/// the leftmost free span left of them that fits, or stay put.
fn part2_impl(input_disk_map: DiskMap) -> u64 {
	let mut files = vec![];
	let mut gaps = vec![];
	let mut pos = 0_usize;
	for (i, &len) in input_disk_map.0.iter().enumerate() {
		let len = len as usize;
		if i % 2 == 0 { files.push((pos, len)) }
		else if len > 0 { gaps.push((pos, len)) }
		pos += len;
	}

	for id in (0..files.len()).rev() {
		let (start, len) = files[id];
		let Some(gap_index) = gaps.iter()
			.position(|&(gap_start, gap_len)| gap_start < start && gap_len >= len)
			else { continue };

		let (gap_start, gap_len) = gaps[gap_index];
		files[id] = (gap_start, len);
		if gap_len == len {
			gaps.remove(gap_index);
		} else {
			gaps[gap_index] = (gap_start + len, gap_len - len);
		}
	}

	files.iter()
		.enumerate()
		.map(|(id, &(start, len))| (start..start + len)
			.map(|i| i as u64 * id as u64)
			.sum::<u64>())
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_disk_map())
}


mod parsing {
	use std::str::FromStr;
	use super::DiskMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DiskMapError {
		Empty,
		InvalidByte { column: usize, found: u8 },
	}

	impl FromStr for DiskMap {
		type Err = DiskMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.trim_end();
			if s.is_empty() { return Err(DiskMapError::Empty) }

			s.bytes()
				.enumerate()
				.map(|(c, b)| if b.is_ascii_digit() { Ok(b - b'0') }
					else { Err(DiskMapError::InvalidByte { column: c + 1, found: b }) })
				.collect::<Result<_, _>>()
				.map(DiskMap)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = "2333133121414131402";
	assert_eq!(part1_impl(input_disk_map_from_str("12345")), 60);
	assert_eq!(part1_impl(input_disk_map_from_str(INPUT)), 1928);
	assert_eq!(part1(), 1928);
	assert_eq!(part2_impl(input_disk_map_from_str(INPUT)), 2858);
	assert_eq!(part2(), 2858);
}
