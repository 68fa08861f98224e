pub mod files;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(files::upload_files)
        .service(files::list_files)
        .service(files::delete_file);
}
