use std::time::Duration;

pub const STEP_PERIOD: Duration = Duration::from_millis(2500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	Question,
	Retrieval,
	Generation,
	Answer,
}

impl Stage {
	pub const ALL: [Stage; 4] = [
		Stage::Question,
		Stage::Retrieval,
		Stage::Generation,
		Stage::Answer,
	];

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn caption(self) -> &'static str {
		match self {
			Stage::Question => "Question",
			Stage::Retrieval => "Retrieval",
			Stage::Generation => "AI Gen",
			Stage::Answer => "ISO Doc",
		}
	}

	/// CSS modifier carrying the stage's accent colour.
	pub fn accent(self) -> &'static str {
		match self {
			Stage::Question => "accent-blue",
			Stage::Retrieval => "accent-gold",
			Stage::Generation => "accent-purple",
			Stage::Answer => "accent-green",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
	Active,
	Reached,
	Pending,
}

impl StageState {
	pub fn class(self) -> &'static str {
		match self {
			StageState::Active => "stage-active",
			StageState::Reached => "stage-reached",
			StageState::Pending => "stage-pending",
		}
	}
}

/// Position in the question -> retrieval -> generation -> answer loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineCycle {
	step: usize,
}

impl PipelineCycle {
	pub fn step(&self) -> usize {
		self.step
	}

	pub fn current(&self) -> Stage {
		Stage::ALL[self.step]
	}

	pub fn advance(&mut self) {
		self.step = (self.step + 1) % Stage::ALL.len();
	}

	pub fn stage_state(&self, stage: Stage) -> StageState {
		let i = stage.index();
		if i == self.step {
			StageState::Active
		} else if i < self.step {
			StageState::Reached
		} else {
			StageState::Pending
		}
	}

	/// Whether the arrow leading into `stage` is lit.
	pub fn connector_lit(&self, stage: Stage) -> bool {
		self.step >= stage.index()
	}
}
