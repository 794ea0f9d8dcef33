use diesel::prelude::*;

use crate::domain::basket_line::{BasketLine as DomainBasketLine, NewBasketLine as DomainNewBasketLine};
use crate::models::basket_line::{BasketLine as DbBasketLine, NewBasketLine as DbNewBasketLine};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BasketLineReader, BasketLineWriter, DieselRepository};

impl BasketLineReader for DieselRepository {
    fn get_basket_line_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBasketLine>> {
        use crate::schema::basket_lines;

        let mut conn = self.conn()?;
        let basket_line = basket_lines::table
            .filter(basket_lines::id.eq(id))
            .filter(basket_lines::deleted_at.is_null())
            .first::<DbBasketLine>(&mut conn)
            .optional()?;

        Ok(basket_line.map(Into::into))
    }

    fn list_basket_lines(&self) -> RepositoryResult<Vec<DomainBasketLine>> {
        use crate::schema::basket_lines;

        let mut conn = self.conn()?;
        let rows = basket_lines::table
            .filter(basket_lines::deleted_at.is_null())
            .order(basket_lines::id.asc())
            .load::<DbBasketLine>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl BasketLineWriter for DieselRepository {
    fn create_basket_line(
        &self,
        new_basket_line: &DomainNewBasketLine,
    ) -> RepositoryResult<DomainBasketLine> {
        use crate::schema::basket_lines;

        let mut conn = self.conn()?;
        let db_new = DbNewBasketLine::from(new_basket_line);

        let created = diesel::insert_into(basket_lines::table)
            .values(&db_new)
            .get_result::<DbBasketLine>(&mut conn)?;

        Ok(created.into())
    }
}
