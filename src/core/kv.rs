use r2d2::Pool;
use redis::{Client, ConnectionLike};

pub fn init_redis_pool(redis_url: &str) -> anyhow::Result<Pool<Client>> {
    let client = Client::open(redis_url)?;
    let pool = Pool::builder().build(client)?;
    Ok(pool)
}

pub fn get_blob<C: ConnectionLike>(redis_conn: &mut C, key: &str) -> redis::RedisResult<Option<String>> {
    redis::cmd("get").arg(key).query(redis_conn)
}

pub fn set_blob<C: ConnectionLike>(redis_conn: &mut C, key: &str, blob: &str) -> redis::RedisResult<()> {
    redis::cmd("set").arg(key).arg(blob).exec(redis_conn)
}
