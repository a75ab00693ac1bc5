// NWT platform API server
// 역할: 인증 / 프로필 / NWT 지갑 / 만화 관리 REST API
// NWT platform API server: auth / profiles / NWT wallet / comics REST API

pub mod domains;
pub mod routes;
pub mod shared;
