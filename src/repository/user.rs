use diesel::prelude::*;

use crate::{
    domain::user::{NewUser, User},
    repository::{DieselRepository, UserReader, UserWriter, errors::RepositoryResult},
};

impl UserReader for DieselRepository {
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::username.eq(username))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }
}
