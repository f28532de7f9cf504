mod users;

pub(crate) use users::UserListPage;
