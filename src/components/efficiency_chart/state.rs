/// Smallest drawn bar, in percent of the chart height.
pub const MIN_BAR_PERCENT: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
	#[default]
	Staff,
	Manager,
}

impl Role {
	pub const ALL: [Role; 2] = [Role::Staff, Role::Manager];

	pub fn button_label(self) -> &'static str {
		match self {
			Role::Staff => "加工部同仁",
			Role::Manager => "部門主管",
		}
	}
}

/// Minutes spent on the paper workflow versus the digital one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoleSeries {
	pub before: f64,
	pub after: f64,
	pub label: &'static str,
}

pub fn series(role: Role) -> RoleSeries {
	match role {
		Role::Staff => RoleSeries {
			before: 10.0,
			after: 3.0,
			label: "同仁填寫時間 (分)",
		},
		Role::Manager => RoleSeries {
			before: 30.0,
			after: 2.0,
			label: "主管統整時間 (分)",
		},
	}
}

pub fn scale_max(role: Role) -> f64 {
	match role {
		Role::Staff => 12.0,
		Role::Manager => 35.0,
	}
}

pub fn bar_height_percent(value: f64, max: f64) -> f64 {
	(value / max * 100.0).clamp(MIN_BAR_PERCENT, 100.0)
}

pub fn format_minutes(value: f64) -> String {
	format!("{} min", value)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EfficiencyChart {
	role: Role,
}

impl EfficiencyChart {
	pub fn role(&self) -> Role {
		self.role
	}

	pub fn select_role(&mut self, role: Role) {
		self.role = role;
	}

	pub fn current(&self) -> RoleSeries {
		series(self.role)
	}

	/// `(before, after)` bar heights in percent.
	pub fn bar_heights(&self) -> (f64, f64) {
		let (s, max) = (self.current(), scale_max(self.role));
		(bar_height_percent(s.before, max), bar_height_percent(s.after, max))
	}

	pub fn minutes_saved(&self) -> f64 {
		let s = self.current();
		s.before - s.after
	}
}
