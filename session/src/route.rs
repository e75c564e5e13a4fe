//! Portal routes and who may open them.

use portal_types::Role;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoterPage {
    Dashboard,
    Vote,
    Verify,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommissionerPage {
    Dashboard,
    Voters,
    Results,
    Analysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Voter(VoterPage),
    Commissioner(CommissionerPage),
}

/// Outcome of checking a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

impl Route {
    /// Parse a portal path. `/` is an alias for the login page.
    pub fn parse(path: &str) -> Option<Self> {
        let route = match path.trim_end_matches('/') {
            "" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/voter/dashboard" => Self::Voter(VoterPage::Dashboard),
            "/voter/vote" => Self::Voter(VoterPage::Vote),
            "/voter/verify" => Self::Voter(VoterPage::Verify),
            "/commissioner/dashboard" => Self::Commissioner(CommissionerPage::Dashboard),
            "/commissioner/voters" => Self::Commissioner(CommissionerPage::Voters),
            "/commissioner/results" => Self::Commissioner(CommissionerPage::Results),
            "/commissioner/analysis" => Self::Commissioner(CommissionerPage::Analysis),
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Voter(VoterPage::Dashboard) => "/voter/dashboard",
            Self::Voter(VoterPage::Vote) => "/voter/vote",
            Self::Voter(VoterPage::Verify) => "/voter/verify",
            Self::Commissioner(CommissionerPage::Dashboard) => "/commissioner/dashboard",
            Self::Commissioner(CommissionerPage::Voters) => "/commissioner/voters",
            Self::Commissioner(CommissionerPage::Results) => "/commissioner/results",
            Self::Commissioner(CommissionerPage::Analysis) => "/commissioner/analysis",
        }
    }

    /// The role a route is reserved for; `None` for public pages.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Login | Self::Register => None,
            Self::Voter(_) => Some(Role::Voter),
            Self::Commissioner(_) => Some(Role::Commissioner),
        }
    }

    /// Landing page for a role.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Voter => Self::Voter(VoterPage::Dashboard),
            Role::Commissioner => Self::Commissioner(CommissionerPage::Dashboard),
        }
    }

    /// Public pages are always granted. Protected pages send signed-out
    /// users (and identities without a role) to login, and other roles to
    /// their own dashboard.
    pub fn access_for(&self, authenticated: bool, role: Option<Role>) -> Access {
        let Some(required) = self.required_role() else {
            return Access::Granted;
        };
        if !authenticated {
            return Access::Redirect(Self::Login);
        }
        match role {
            Some(role) if role == required => Access::Granted,
            Some(role) => Access::Redirect(Self::dashboard(role)),
            None => Access::Redirect(Self::Login),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Login,
            Route::Register,
            Route::Voter(VoterPage::Verify),
            Route::Commissioner(CommissionerPage::Analysis),
        ] {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
        assert_eq!(Route::parse("/"), Some(Route::Login));
        assert_eq!(Route::parse("/nowhere"), None);
    }

    #[test]
    fn public_routes_are_open() {
        assert_eq!(Route::Register.access_for(false, None), Access::Granted);
    }

    #[test]
    fn protected_routes_check_role() {
        let results = Route::Commissioner(CommissionerPage::Results);
        assert_eq!(
            results.access_for(false, Some(Role::Commissioner)),
            Access::Redirect(Route::Login)
        );
        assert_eq!(
            results.access_for(true, Some(Role::Commissioner)),
            Access::Granted
        );
        assert_eq!(
            results.access_for(true, Some(Role::Voter)),
            Access::Redirect(Route::Voter(VoterPage::Dashboard))
        );
        assert_eq!(
            results.access_for(true, None),
            Access::Redirect(Route::Login)
        );
    }
}
