use crate::server::ServerRouter;

mod feed;
mod follow;
mod posts;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(feed::routes())
        .merge(posts::routes())
        .merge(follow::routes())
}
