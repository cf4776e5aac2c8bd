// Copyright (c) 2024 Bastiaan Marinus van de Weerd

/// Declares the `dayNN` modules, keeping the zero-padded names intact.
macro_rules! mod_days {
	[ $( $day:literal ),+ $( , )? ] => { paste::paste! {
		$( pub(crate) mod [<day $day>]; )+
	} }
}

pub(crate) use mod_days;
