/// Points awarded for each action
pub struct Rewards;

impl Rewards {
    /// Creating an account
    pub const REGISTRATION: u32 = 50;

    /// Creating a challenge
    pub const CHALLENGE_CREATED: u32 = 20;

    /// Logging a result
    pub const RESULT_RECORDED: u32 = 10;
}

/// Fixed wording of the awards
pub(crate) mod titles {
    pub const WELCOME: &str = "Welcome!";
    pub const WELCOME_DESCRIPTION: &str = "Registered in the app";
    pub const CHALLENGE_CREATED: &str = "Challenge created!";
    pub const RESULT_RECORDED: &str = "Result recorded!";
}
