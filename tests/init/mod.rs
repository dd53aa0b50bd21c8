mod init_repository_successfully;
