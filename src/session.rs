//! Session lifecycle around the backend login: the gateway's own session
//! store, the cookies it hands to browsers, and the invalidation transform
//! applied to captured backend cookies on logout.

mod cookies;
pub use self::cookies::{
    EPOCH_EXPIRES, clear_session_cookie, credentials_from_set_cookies, expire_cookie, expire_cookies,
    session_cookie,
};

mod store;
pub use self::store::{SessionError, SessionStore, SessionUser};

mod flow;
pub use self::flow::{login_flow, logout_flow};
