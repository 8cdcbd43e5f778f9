mod delete_user;
mod get_user_detail;
mod register;

use luxe_test_utils::prelude::*;

use super::*;
