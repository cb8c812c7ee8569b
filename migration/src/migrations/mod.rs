pub mod m202601150001_create_usuarios;
pub mod m202601150002_create_grupos;
