use chrono::NaiveDate;
use diesel::dsl::{avg, count, count_distinct, count_star, sum};
use diesel::prelude::*;

use crate::{
    domain::stats::{
        AverageLeader, ClientLeaderboard, DailySales, FrequencyLeader, GeneralStats, VolumeLeader,
    },
    repository::{DieselRepository, StatsReader, errors::RepositoryResult},
};

impl StatsReader for DieselRepository {
    fn sales_by_day(&self) -> RepositoryResult<Vec<DailySales>> {
        use crate::schema::sales;

        let mut conn = self.conn()?;
        let rows = sales::table
            .group_by(sales::sale_date)
            .select((sales::sale_date, sum(sales::value), count_star()))
            .order(sales::sale_date.asc())
            .load::<(NaiveDate, Option<f64>, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(sale_date, total, transactions)| DailySales {
                sale_date,
                total_sales: total.unwrap_or(0.0),
                total_transactions: transactions,
            })
            .collect())
    }

    fn client_leaderboard(&self) -> RepositoryResult<ClientLeaderboard> {
        use crate::schema::{clients, sales};

        let mut conn = self.conn()?;

        let volume = clients::table
            .inner_join(sales::table)
            .group_by((clients::id, clients::name, clients::email))
            .select((clients::id, clients::name, clients::email, sum(sales::value)))
            .order(sum(sales::value).desc())
            .first::<(i32, String, String, Option<f64>)>(&mut conn)
            .optional()?;

        let average = clients::table
            .inner_join(sales::table)
            .group_by((clients::id, clients::name, clients::email))
            .select((
                clients::id,
                clients::name,
                clients::email,
                avg(sales::value),
                count(sales::id),
            ))
            .order(avg(sales::value).desc())
            .first::<(i32, String, String, Option<f64>, i64)>(&mut conn)
            .optional()?;

        let frequency = clients::table
            .inner_join(sales::table)
            .group_by((clients::id, clients::name, clients::email))
            .select((
                clients::id,
                clients::name,
                clients::email,
                count_distinct(sales::sale_date),
                count(sales::id),
            ))
            .order(count_distinct(sales::sale_date).desc())
            .first::<(i32, String, String, i64, i64)>(&mut conn)
            .optional()?;

        Ok(ClientLeaderboard {
            top_volume_client: volume.map(|(id, name, email, total)| VolumeLeader {
                id,
                name,
                email,
                total_volume: total.unwrap_or(0.0),
            }),
            top_average_client: average.map(|(id, name, email, average_value, total_sales)| {
                AverageLeader {
                    id,
                    name,
                    email,
                    average_value: average_value.unwrap_or(0.0),
                    total_sales,
                }
            }),
            top_frequency_client: frequency.map(|(id, name, email, unique_days, total_sales)| {
                FrequencyLeader {
                    id,
                    name,
                    email,
                    unique_days,
                    total_sales,
                }
            }),
        })
    }

    fn general_stats(&self) -> RepositoryResult<GeneralStats> {
        use crate::schema::{clients, sales};

        let mut conn = self.conn()?;

        let total_clients: i64 = clients::table.count().get_result(&mut conn)?;
        let (total_sales, total_revenue) = sales::table
            .select((count_star(), sum(sales::value)))
            .first::<(i64, Option<f64>)>(&mut conn)?;
        let average_sale_value: Option<f64> =
            sales::table.select(avg(sales::value)).first(&mut conn)?;

        Ok(GeneralStats {
            total_clients,
            total_sales,
            total_revenue: total_revenue.unwrap_or(0.0),
            average_sale_value: average_sale_value.unwrap_or(0.0),
        })
    }
}
