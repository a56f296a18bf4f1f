use diesel::prelude::*;

use crate::{
    domain::branch::{
        Branch as DomainBranch, NewBranch as DomainNewBranch, UpdateBranch as DomainUpdateBranch,
    },
    models::branch::{
        Branch as DbBranch, NewBranch as DbNewBranch, UpdateBranch as DbUpdateBranch,
    },
    repository::{BranchReader, BranchWriter, DieselRepository},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl BranchReader for DieselRepository {
    fn get_branch_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBranch>> {
        use crate::schema::branches;

        let mut conn = self.conn()?;

        let branch = branches::table
            .filter(branches::id.eq(id))
            .first::<DbBranch>(&mut conn)
            .optional()?;

        Ok(branch.map(DomainBranch::from))
    }

    fn list_branches(&self) -> RepositoryResult<Vec<DomainBranch>> {
        use crate::schema::branches;

        let mut conn = self.conn()?;

        let branches = branches::table
            .order((branches::created_at.desc(), branches::id.desc()))
            .load::<DbBranch>(&mut conn)?;

        Ok(branches.into_iter().map(DomainBranch::from).collect())
    }
}

impl BranchWriter for DieselRepository {
    fn create_branch(&self, new_branch: &DomainNewBranch) -> RepositoryResult<DomainBranch> {
        use crate::schema::branches;

        let mut conn = self.conn()?;

        let insertable = DbNewBranch::from(new_branch);

        let created = diesel::insert_into(branches::table)
            .values(&insertable)
            .get_result::<DbBranch>(&mut conn)?;

        Ok(created.into())
    }

    fn update_branch(
        &self,
        branch_id: i32,
        updates: &DomainUpdateBranch,
    ) -> RepositoryResult<DomainBranch> {
        use crate::schema::branches;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateBranch::from(updates);

        let updated = diesel::update(branches::table.filter(branches::id.eq(branch_id)))
            .set(&db_updates)
            .get_result::<DbBranch>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_branch(&self, branch_id: i32) -> RepositoryResult<()> {
        use crate::schema::branches;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(branches::table.filter(branches::id.eq(branch_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
