use common::model::award::Award;

pub enum Msg {
    /// A collection fetch resolved; replaces the cache wholesale.
    AwardsLoaded(Vec<Award>),
    /// One rotation step.
    Tick,
}
