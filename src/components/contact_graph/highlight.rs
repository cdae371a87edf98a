use std::collections::HashSet;

/// The hovered node and its one-hop neighbourhood, by node index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	pub hovered: Option<usize>,
	pub members: HashSet<usize>,
}

impl Highlight {
	/// Expands `hovered` by exactly one hop over `links`. Not transitive.
	pub fn propagate(hovered: Option<usize>, links: &[(usize, usize)]) -> Self {
		let mut members = HashSet::new();
		if let Some(idx) = hovered {
			members.insert(idx);
			for &(src, tgt) in links {
				if src == idx {
					members.insert(tgt);
				} else if tgt == idx {
					members.insert(src);
				}
			}
		}
		Self { hovered, members }
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.members.contains(&idx)
	}

	pub fn is_neighbor(&self, idx: usize) -> bool {
		self.is_highlighted(idx) && !self.is_hovered(idx)
	}

	/// Whether an edge touches the hovered node.
	pub fn touches(&self, src: usize, tgt: usize) -> bool {
		self.is_hovered(src) || self.is_hovered(tgt)
	}
}
