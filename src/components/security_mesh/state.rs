use std::collections::BTreeSet;

/// Identifier of a user node (the clickable circles).
pub type NodeId = usize;
/// Identifier of a security check node (the squares).
pub type CheckId = usize;

pub const CHECK_COUNT: usize = 4;

/// User node -> check nodes it is wired to. Node 4 sits in the centre.
const ADJACENCY: [&[CheckId]; 5] = [&[0, 1], &[0, 2], &[1, 3], &[2, 3], &[0, 1, 2, 3]];

pub const SURFACE_SIZE: f64 = 256.0;
pub const USER_RADIUS: f64 = 16.0;
pub const CHECK_HALF: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserSlot {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckSlot {
	pub id: CheckId,
	pub x: f64,
	pub y: f64,
	pub label: &'static str,
}

// Positions are fractions of the square surface.
pub const USER_SLOTS: [UserSlot; 5] = [
	UserSlot { id: 0, x: 0.2, y: 0.2 },
	UserSlot { id: 1, x: 0.8, y: 0.2 },
	UserSlot { id: 4, x: 0.5, y: 0.5 },
	UserSlot { id: 2, x: 0.2, y: 0.8 },
	UserSlot { id: 3, x: 0.8, y: 0.8 },
];

pub const CHECK_SLOTS: [CheckSlot; CHECK_COUNT] = [
	CheckSlot { id: 0, x: 0.5, y: 0.2, label: "2FA" },
	CheckSlot { id: 1, x: 0.2, y: 0.5, label: "Key" },
	CheckSlot { id: 2, x: 0.8, y: 0.5, label: "Bio" },
	CheckSlot { id: 3, x: 0.5, y: 0.8, label: "Log" },
];

/// Checks wired to `node`; empty for ids outside the mesh.
pub fn adjacent_checks(node: NodeId) -> &'static [CheckId] {
	ADJACENCY.get(node).copied().unwrap_or(&[])
}

/// Threatened user nodes. Check activation is always derived from this set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecurityMesh {
	threatened: BTreeSet<NodeId>,
}

impl SecurityMesh {
	pub fn toggle_threat(&mut self, node: NodeId) {
		if !self.threatened.remove(&node) {
			self.threatened.insert(node);
		}
	}

	pub fn is_threatened(&self, node: NodeId) -> bool {
		self.threatened.contains(&node)
	}

	pub fn threat_count(&self) -> usize {
		self.threatened.len()
	}

	pub fn is_check_active(&self, check: CheckId) -> bool {
		self.threatened
			.iter()
			.any(|&node| adjacent_checks(node).contains(&check))
	}

	pub fn active_checks(&self) -> Vec<CheckId> {
		(0..CHECK_COUNT)
			.filter(|&c| self.is_check_active(c))
			.collect()
	}

	pub fn status_line(&self) -> String {
		match self.threat_count() {
			0 => "System Status: Secure".to_string(),
			n => format!("Security Alert: Blocked {} phishing attempts.", n),
		}
	}
}

/// Converts a viewport click into surface pixels. `origin` is the element's
/// bounding-rect corner and `border` its left/top border widths.
pub fn to_surface(client: (f64, f64), origin: (f64, f64), border: (f64, f64)) -> (f64, f64) {
	(
		client.0 - origin.0 - border.0,
		client.1 - origin.1 - border.1,
	)
}

/// User node under a surface position, where the drawn surface spans `size`
/// pixels on each side.
pub fn node_at(x: f64, y: f64, size: f64) -> Option<NodeId> {
	let scale = size / SURFACE_SIZE;
	USER_SLOTS
		.iter()
		.find(|slot| {
			let (dx, dy) = (slot.x * size - x, slot.y * size - y);
			(dx * dx + dy * dy).sqrt() <= USER_RADIUS * scale
		})
		.map(|slot| slot.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mesh_with(nodes: &[NodeId]) -> SecurityMesh {
		let mut mesh = SecurityMesh::default();
		for &n in nodes {
			mesh.toggle_threat(n);
		}
		mesh
	}

	#[test]
	fn no_threats_means_no_active_checks() {
		let mesh = SecurityMesh::default();
		assert!(mesh.active_checks().is_empty());
		assert_eq!(mesh.status_line(), "System Status: Secure");
	}

	#[test]
	fn single_corner_node_lights_its_two_checks() {
		assert_eq!(mesh_with(&[0]).active_checks(), vec![0, 1]);
		assert_eq!(mesh_with(&[1]).active_checks(), vec![0, 2]);
		assert_eq!(mesh_with(&[2]).active_checks(), vec![1, 3]);
		assert_eq!(mesh_with(&[3]).active_checks(), vec![2, 3]);
	}

	#[test]
	fn centre_node_lights_every_check() {
		assert_eq!(mesh_with(&[4]).active_checks(), vec![0, 1, 2, 3]);
	}

	#[test]
	fn activation_matches_adjacency_for_every_subset() {
		for bits in 0u32..32 {
			let nodes: Vec<NodeId> = (0..5).filter(|n| bits & (1 << n) != 0).collect();
			let mesh = mesh_with(&nodes);
			for check in 0..CHECK_COUNT {
				let expected = nodes.iter().any(|&n| adjacent_checks(n).contains(&check));
				assert_eq!(mesh.is_check_active(check), expected, "nodes {:?}", nodes);
			}
		}
	}

	#[test]
	fn opposite_corners_cover_all_checks() {
		let mesh = mesh_with(&[0, 3]);
		assert_eq!(mesh.active_checks(), vec![0, 1, 2, 3]);
		assert_eq!(
			mesh.status_line(),
			"Security Alert: Blocked 2 phishing attempts."
		);
	}

	#[test]
	fn double_toggle_restores_set() {
		let mut mesh = mesh_with(&[1, 4]);
		let before = mesh.clone();
		mesh.toggle_threat(2);
		mesh.toggle_threat(2);
		assert_eq!(mesh, before);
		mesh.toggle_threat(4);
		mesh.toggle_threat(4);
		assert_eq!(mesh, before);
	}

	#[test]
	fn toggle_removes_existing_threat() {
		let mut mesh = mesh_with(&[4]);
		mesh.toggle_threat(4);
		assert_eq!(mesh.threat_count(), 0);
		assert!(!mesh.is_check_active(0));
	}

	#[test]
	fn unknown_ids_stay_inactive() {
		let mesh = mesh_with(&[9]);
		assert!(mesh.active_checks().is_empty());
		assert!(!mesh.is_check_active(7));
	}

	#[test]
	fn hit_test_finds_nodes_at_their_slots() {
		assert_eq!(node_at(128.0, 128.0, SURFACE_SIZE), Some(4));
		assert_eq!(node_at(51.2 + 5.0, 204.8, SURFACE_SIZE), Some(2));
		// Check squares are not clickable.
		assert_eq!(node_at(128.0, 51.2, SURFACE_SIZE), None);
		// Scaled surface.
		assert_eq!(node_at(409.6, 102.4, 512.0), Some(1));
	}

	#[test]
	fn click_near_node_edge_accounts_for_border() {
		// Canvas box at (40, 300) with a 1px border; the click lands 15.5px
		// right of the centre node, just inside its radius.
		let (click, origin) = ((184.5, 429.0), (40.0, 300.0));
		let (x, y) = to_surface(click, origin, (1.0, 1.0));
		assert_eq!((x, y), (143.5, 128.0));
		assert_eq!(node_at(x, y, SURFACE_SIZE), Some(4));

		// Measured from the border box, the same click misses.
		let (x, y) = to_surface(click, origin, (0.0, 0.0));
		assert_eq!(node_at(x, y, SURFACE_SIZE), None);
	}
}
